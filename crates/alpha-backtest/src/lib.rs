//! Simulated strategy backtests.
//!
//! The real backtest engine runs server-side against the full feature
//! history. Until that API exists, [`run_backtest`] produces a deterministic
//! placeholder run: fixed headline metrics, a synthetic monthly equity curve,
//! and an optional artificial delay so the client's progress reporting can be
//! exercised.

use std::time::Duration;

use alpha_core::{BacktestConfig, BacktestMetrics, BacktestRun, EquityPoint, RebalanceFreq};
use chrono::{Datelike, Months, Utc};

// Headline numbers of the canned demo strategy.
const DEMO_CAGR: f64 = 0.234;
const DEMO_SHARPE: f64 = 1.85;
const DEMO_MAX_DRAWDOWN: f64 = -0.156;
const DEMO_HIT_RATE: f64 = 0.62;

/// Run a simulated backtest for `config`, sleeping `delay` first to mimic
/// server-side compute time.
///
/// The result is fully deterministic for a given config: metrics are fixed
/// demo values, the equity curve is one point per month compounding at the
/// demo CAGR with a small periodic wobble, and trade counts follow the
/// rebalance cadence.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use alpha_backtest::run_backtest;
/// use alpha_core::{BacktestConfig, RebalanceFreq};
/// use chrono::NaiveDate;
///
/// let config = BacktestConfig {
///     tickers: vec!["NVDA".into(), "TSM".into()],
///     start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     rebalance_freq: RebalanceFreq::Quarterly,
///     transaction_cost_bps: 10.0,
/// };
/// let run = run_backtest(config, Duration::ZERO);
/// assert_eq!(run.metrics.cagr, Some(0.234));
/// assert_eq!(run.equity_curve.first().map(|p| p.equity), Some(1.0));
/// ```
pub fn run_backtest(config: BacktestConfig, delay: Duration) -> BacktestRun {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }

    let months = months_between(&config);
    let equity_curve = equity_curve(&config, months);
    let total_return = equity_curve.last().map(|p| p.equity - 1.0);
    let num_trades = trade_count(&config, months);

    let created_at = Utc::now();
    let run_id = format!("bt-{}", created_at.format("%Y%m%d%H%M%S"));

    BacktestRun {
        run_id,
        config,
        metrics: BacktestMetrics {
            cagr: Some(DEMO_CAGR),
            sharpe: Some(DEMO_SHARPE),
            max_drawdown: Some(DEMO_MAX_DRAWDOWN),
            volatility: Some(0.18),
            turnover: Some(1.2),
            hit_rate: Some(DEMO_HIT_RATE),
            total_return,
            num_trades: Some(num_trades),
        },
        equity_curve,
        created_at,
    }
}

/// Whole months from start to end, clamped to at least one.
fn months_between(config: &BacktestConfig) -> u32 {
    let start = config.start_date;
    let end = config.end_date;
    if end <= start {
        return 1;
    }
    let months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    months.max(1) as u32
}

fn equity_curve(config: &BacktestConfig, months: u32) -> Vec<EquityPoint> {
    (0..=months)
        .filter_map(|i| {
            let date = config.start_date.checked_add_months(Months::new(i))?;
            let years = f64::from(i) / 12.0;
            let trend = (1.0 + DEMO_CAGR).powf(years);
            // Small periodic wobble so the curve looks like a market, not a bond.
            let wobble = if i == 0 {
                0.0
            } else {
                0.03 * (f64::from(i) * 1.3).sin()
            };
            Some(EquityPoint {
                date,
                equity: trend * (1.0 + wobble),
            })
        })
        .collect()
}

fn trade_count(config: &BacktestConfig, months: u32) -> u32 {
    let period = match config.rebalance_freq {
        RebalanceFreq::Monthly => 1,
        RebalanceFreq::Quarterly => 3,
        RebalanceFreq::Annually => 12,
    };
    let rebalances = (months / period).max(1);
    rebalances * config.tickers.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn demo_config() -> BacktestConfig {
        BacktestConfig {
            tickers: vec!["NVDA".into(), "TSM".into(), "META".into(), "GOOG".into()],
            start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            rebalance_freq: RebalanceFreq::Quarterly,
            transaction_cost_bps: 10.0,
        }
    }

    #[test]
    fn metrics_are_the_demo_values() {
        let run = run_backtest(demo_config(), Duration::ZERO);
        assert_eq!(run.metrics.cagr, Some(0.234));
        assert_eq!(run.metrics.sharpe, Some(1.85));
        assert_eq!(run.metrics.max_drawdown, Some(-0.156));
        assert_eq!(run.metrics.hit_rate, Some(0.62));
    }

    #[test]
    fn equity_curve_starts_at_one_and_spans_the_period() {
        let run = run_backtest(demo_config(), Duration::ZERO);
        // 24 months plus the starting point.
        assert_eq!(run.equity_curve.len(), 25);
        assert_eq!(run.equity_curve[0].equity, 1.0);
        assert_eq!(
            run.equity_curve[0].date,
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
        );
        assert_eq!(
            run.equity_curve.last().unwrap().date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn equity_curve_trends_upward() {
        let run = run_backtest(demo_config(), Duration::ZERO);
        let last = run.equity_curve.last().unwrap().equity;
        assert!(last > 1.3, "two years at 23.4% CAGR should compound: {last}");
        assert_eq!(run.metrics.total_return, Some(last - 1.0));
    }

    #[test]
    fn trade_count_follows_rebalance_cadence() {
        let run = run_backtest(demo_config(), Duration::ZERO);
        // 24 months / quarterly = 8 rebalances of 4 tickers.
        assert_eq!(run.metrics.num_trades, Some(32));

        let mut monthly = demo_config();
        monthly.rebalance_freq = RebalanceFreq::Monthly;
        let run = run_backtest(monthly, Duration::ZERO);
        assert_eq!(run.metrics.num_trades, Some(96));
    }

    #[test]
    fn degenerate_date_range_still_produces_a_run() {
        let mut config = demo_config();
        config.end_date = config.start_date;
        let run = run_backtest(config, Duration::ZERO);
        assert_eq!(run.equity_curve.len(), 2);
        assert!(run.metrics.num_trades.unwrap() > 0);
    }

    #[test]
    fn run_id_has_the_expected_shape() {
        let run = run_backtest(demo_config(), Duration::ZERO);
        assert!(run.run_id.starts_with("bt-"));
        assert_eq!(run.run_id.len(), "bt-".len() + 14);
    }

    #[test]
    fn run_serializes_to_json() {
        let run = run_backtest(demo_config(), Duration::ZERO);
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["metrics"]["cagr"], 0.234);
        assert_eq!(json["config"]["rebalance_freq"], "quarterly");
    }
}
