use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};

use alpha_backtest::run_backtest;
use alpha_core::{
    AlphaConfig, BacktestConfig, BacktestRun, Language, OutputFormat, RebalanceFreq, ViewMode,
};
use alpha_data::Catalog;
use alpha_difflens::report::DiffReport;
use alpha_i18n::{translate, translate_with};
use alpha_store::{FileStore, Preset, SettingsStore};

#[derive(Parser)]
#[command(
    name = "alpha",
    version,
    about = "SEC filing analysis in your terminal",
    long_about = "Alpha Factory turns SEC filings into signals — section diffs, novelty scores,\n\
                   fundamentals, and plain-language insights for the companies you track.\n\n\
                   Examples:\n  \
                     alpha companies                 List tracked companies\n  \
                     alpha diffs NVDA                Show filing section changes\n  \
                     alpha diffs NVDA --section item_1a   Focus on Risk Factors\n  \
                     alpha fundamentals NVDA         Quarterly fundamentals and signals\n  \
                     alpha backtest                  Run a strategy backtest\n  \
                     alpha settings language zh      Switch the display language"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: .alpha.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        long_help = "Output format for command results.\n\n\
                       Formats:\n  \
                         text      Human-readable tables and summaries (default)\n  \
                         json      Machine-readable JSON\n  \
                         markdown  GitHub-flavored Markdown"
    )]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    /// When to use colors
    #[arg(long, global = true, default_value = "auto")]
    color: ColorChoice,
}

#[derive(Subcommand)]
enum Command {
    /// List companies and their latest filings
    #[command(long_about = "List companies and their latest filings.\n\n\
        Shows all covered companies by default; tracked tickers are starred.\n\
        Use --tracked to restrict the list to your portfolio.\n\n\
        Examples:\n  alpha companies\n  alpha companies --tracked")]
    Companies {
        /// Only show tracked tickers
        #[arg(long)]
        tracked: bool,
    },
    /// Show SEC filings for a company
    #[command(long_about = "Show SEC filings for a company.\n\n\
        Lists 10-K and 10-Q filings with their dates and extracted sections.\n\n\
        Examples:\n  alpha filings NVDA\n  alpha filings nvda --format json")]
    Filings {
        /// Ticker symbol
        ticker: String,
    },
    /// Show section changes between consecutive filings
    #[command(
        long_about = "Show section changes between consecutive filings.\n\n\
        Classifies each diff line and shows a novelty badge per section.\n\
        In beginner view mode (see 'alpha settings view-mode') the raw diff is\n\
        replaced with a plain-language summary.\n\n\
        Examples:\n  alpha diffs NVDA\n  alpha diffs NVDA --section item_1a\n  alpha diffs NVDA --view advanced"
    )]
    Diffs {
        /// Ticker symbol
        ticker: String,

        /// Only show diffs for this section key (e.g. item_1a)
        #[arg(long)]
        section: Option<String>,

        /// Override the configured view mode for this invocation
        #[arg(long)]
        view: Option<ViewMode>,
    },
    /// Show quarterly fundamentals and derived signals
    #[command(long_about = "Show quarterly fundamentals and derived signals.\n\n\
        Revenue, net income, leverage, profitability, and the filing-derived\n\
        novelty scores that feed the composite signal.\n\n\
        Examples:\n  alpha fundamentals NVDA\n  alpha fundamentals NVDA --format markdown")]
    Fundamentals {
        /// Ticker symbol
        ticker: String,
    },
    /// Show investment insights for a company
    #[command(long_about = "Show investment insights for a company.\n\n\
        Plain-language tips generated from filing changes, tagged by direction\n\
        (risk, opportunity, neutral) and audience level. Tips follow the\n\
        configured display language.\n\n\
        Examples:\n  alpha tips NVDA\n  alpha tips KO")]
    Tips {
        /// Ticker symbol
        ticker: String,
    },
    /// Run a strategy backtest
    #[command(
        long_about = "Run a strategy backtest over the tracked universe.\n\n\
        Defaults for tickers and transaction cost come from .alpha.toml; flags\n\
        override them. Results include CAGR, Sharpe, drawdown, and hit rate.\n\n\
        Examples:\n  alpha backtest\n  alpha backtest --tickers NVDA --tickers TSM --freq monthly\n  alpha backtest --start 2023-01-01 --end 2024-12-31"
    )]
    Backtest {
        /// Tickers to trade (repeatable; default from config)
        #[arg(long)]
        tickers: Vec<String>,

        /// First trading day
        #[arg(long, default_value = "2022-01-01")]
        start: NaiveDate,

        /// Last trading day
        #[arg(long, default_value = "2024-12-31")]
        end: NaiveDate,

        /// Rebalance cadence
        #[arg(long, default_value = "quarterly")]
        freq: RebalanceFreq,

        /// Round-trip transaction cost in basis points (default from config)
        #[arg(long)]
        cost_bps: Option<f64>,
    },
    /// View or change settings and the tracked portfolio
    Settings {
        #[command(subcommand)]
        action: Option<SettingsCommand>,
    },
    /// Create a default .alpha.toml configuration file
    #[command(long_about = "Create a default .alpha.toml configuration file.\n\n\
        Generates a commented-out template with all available options.\n\
        Fails if .alpha.toml already exists.")]
    Init,
    /// Generate shell completion scripts
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Show current settings and tracked tickers
    Show,
    /// Set the view mode (beginner, intermediate, advanced)
    ViewMode {
        mode: ViewMode,
    },
    /// Set the display language (en, zh)
    Language {
        language: Language,
    },
    /// Enable or disable filing notifications
    Notifications {
        #[arg(value_enum)]
        state: OnOff,
    },
    /// Track a ticker
    Add {
        ticker: String,
    },
    /// Stop tracking a ticker
    Remove {
        ticker: String,
    },
    /// Replace the tracked list with a preset (faang, stan)
    Preset {
        preset: Preset,
    },
    /// Clear all tracked tickers
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
enum OnOff {
    On,
    Off,
}

#[derive(Clone, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

fn print_welcome(use_color: bool) {
    let version = env!("CARGO_PKG_VERSION");

    if use_color {
        println!("\x1b[1m\x1b[33m⚡\x1b[0m \x1b[1malpha\x1b[0m v{version} — SEC filing analysis in your terminal\n");

        println!("Quick start:");
        println!("  \x1b[36malpha init\x1b[0m                    Create a .alpha.toml config file");
        println!("  \x1b[36malpha settings preset stan\x1b[0m    Load the demo portfolio");
        println!("  \x1b[36malpha diffs NVDA\x1b[0m              See what changed in the latest filing\n");

        println!("All commands:");
        println!("  \x1b[32mcompanies\x1b[0m     List covered companies");
        println!("  \x1b[32mfilings\x1b[0m       SEC filings for a company");
        println!("  \x1b[32mdiffs\x1b[0m         Section changes with novelty scores");
        println!("  \x1b[32mfundamentals\x1b[0m  Quarterly metrics and signals");
        println!("  \x1b[32mtips\x1b[0m          Plain-language investment insights");
        println!("  \x1b[32mbacktest\x1b[0m      Run a strategy backtest");
        println!("  \x1b[32msettings\x1b[0m      View mode, language, tracked tickers");
        println!("  \x1b[32minit\x1b[0m          Create default configuration\n");
    } else {
        println!("alpha v{version} — SEC filing analysis in your terminal\n");

        println!("Quick start:");
        println!("  alpha init                    Create a .alpha.toml config file");
        println!("  alpha settings preset stan    Load the demo portfolio");
        println!("  alpha diffs NVDA              See what changed in the latest filing\n");

        println!("All commands:");
        println!("  companies     List covered companies");
        println!("  filings       SEC filings for a company");
        println!("  diffs         Section changes with novelty scores");
        println!("  fundamentals  Quarterly metrics and signals");
        println!("  tips          Plain-language investment insights");
        println!("  backtest      Run a strategy backtest");
        println!("  settings      View mode, language, tracked tickers");
        println!("  init          Create default configuration\n");
    }

    println!("Run 'alpha <command> --help' for details.");
}

/// Dollar amounts scaled to millions/billions, e.g. `$35.1B`.
fn fmt_money(value: f64, language: Language) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("${:.1}{}", value / 1e9, translate("common.billion", language))
    } else if abs >= 1e6 {
        format!("${:.1}{}", value / 1e6, translate("common.million", language))
    } else {
        format!("${value:.0}")
    }
}

fn fmt_opt_money(value: Option<f64>, language: Language) -> String {
    match value {
        Some(v) => fmt_money(v, language),
        None => translate("common.na", language),
    }
}

fn fmt_opt_pct(value: Option<f64>, language: Language) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => translate("common.na", language),
    }
}

fn fmt_opt_num(value: Option<f64>, language: Language) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => translate("common.na", language),
    }
}

fn lookup_company<'a>(catalog: &'a Catalog, ticker: &str) -> Result<&'a alpha_core::Company> {
    catalog.company(ticker).ok_or_else(|| {
        miette::miette!(
            help = "Run 'alpha companies' to see covered tickers",
            "Unknown ticker: {}",
            ticker.trim().to_uppercase()
        )
    })
}

fn run_companies(
    catalog: &Catalog,
    store: &SettingsStore<FileStore>,
    tracked_only: bool,
    format: OutputFormat,
    language: Language,
) -> Result<()> {
    let tracked = store.tickers();
    let companies: Vec<_> = catalog
        .companies()
        .iter()
        .filter(|c| !tracked_only || tracked.contains(&c.ticker))
        .collect();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&companies).into_diagnostic()?
            );
        }
        OutputFormat::Markdown => {
            println!("# {}\n", translate("nav.companies", language));
            println!("| Ticker | Name | CIK | Filings | Latest |");
            println!("|--------|------|-----|---------|--------|");
            for c in &companies {
                let latest = c
                    .latest_filing_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| translate("common.na", language));
                println!(
                    "| {} | {} | {} | {} | {} |",
                    c.ticker, c.name, c.cik, c.filing_count, latest
                );
            }
        }
        OutputFormat::Text => {
            if tracked_only && companies.is_empty() {
                println!("No tracked tickers. Try 'alpha settings preset stan'.");
                return Ok(());
            }
            for c in &companies {
                let star = if tracked.contains(&c.ticker) { "*" } else { " " };
                let latest = c
                    .latest_filing_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| translate("common.na", language));
                let filings =
                    translate_with("company.filings_count", language, &[("count", c.filing_count.to_string())]);
                println!("{star} {:<6} {:<36} {filings}, latest {latest}", c.ticker, c.name);
            }
            println!(
                "\n{}: {}  |  {}: {}",
                translate("dashboard.companies", language),
                companies.len(),
                translate("dashboard.filings", language),
                catalog.total_filings(),
            );
        }
    }
    Ok(())
}

fn run_filings(
    catalog: &Catalog,
    ticker: &str,
    format: OutputFormat,
    language: Language,
) -> Result<()> {
    let company = lookup_company(catalog, ticker)?;
    let filings = catalog.filings(&company.ticker);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&filings).into_diagnostic()?
            );
        }
        OutputFormat::Markdown => {
            println!("# {} — {}\n", company.ticker, translate("tab.filings", language));
            if filings.is_empty() {
                println!("{}", translate("company.no_filings", language));
                return Ok(());
            }
            println!("| Form | Filed | Report | Accession | Sections |");
            println!("|------|-------|--------|-----------|----------|");
            for f in filings {
                println!(
                    "| {} | {} | {} | {} | {} |",
                    f.form_type,
                    f.filing_date,
                    f.report_date,
                    f.accession_no,
                    f.sections.len(),
                );
            }
        }
        OutputFormat::Text => {
            println!("{} — {}", company.name, translate("tab.filings", language));
            println!("{:-<72}", "");
            if filings.is_empty() {
                println!("{}", translate("company.no_filings", language));
                return Ok(());
            }
            for f in filings {
                let kind_key = match f.form_type {
                    alpha_core::FormType::TenK => "filing.10k",
                    alpha_core::FormType::TenQ => "filing.10q",
                };
                println!(
                    "{}  {} ({})  {}: {}  {}: {}",
                    f.form_type,
                    translate(kind_key, language),
                    f.accession_no,
                    translate("filing.filed", language),
                    f.filing_date,
                    translate("filing.report_date", language),
                    f.report_date,
                );
                for s in &f.sections {
                    println!(
                        "    {}  ({} {})",
                        s.section_key,
                        s.char_count,
                        translate("filing.chars", language),
                    );
                }
            }
        }
    }
    Ok(())
}

fn run_diffs(
    catalog: &Catalog,
    config: &AlphaConfig,
    ticker: &str,
    section: Option<&str>,
    view: ViewMode,
    format: OutputFormat,
    language: Language,
    use_color: bool,
) -> Result<()> {
    let company = lookup_company(catalog, ticker)?;
    let reports: Vec<DiffReport> = catalog
        .diffs(&company.ticker)
        .iter()
        .filter(|d| section.map_or(true, |s| d.section_key == s))
        .map(DiffReport::from_diff)
        .collect();

    if reports.is_empty() {
        match section {
            Some(s) => println!("{} ({s})", translate("company.no_diffs", language)),
            None => println!("{}", translate("company.no_diffs", language)),
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&reports).into_diagnostic()?
            );
        }
        OutputFormat::Markdown => {
            println!("# {} — {}\n", company.ticker, translate("tab.diffs", language));
            for report in &reports {
                print!("{}", report.to_markdown(language));
                println!();
            }
        }
        OutputFormat::Text => {
            for report in &reports {
                println!("{} / {}", company.ticker, report.section_key);
                if view.is_beginner() {
                    println!("{}", report.beginner_summary(language));
                } else {
                    print!(
                        "{}",
                        report.render_text(language, use_color, config.diff.max_lines)
                    );
                    println!();
                }
            }
        }
    }
    Ok(())
}

fn run_fundamentals(
    catalog: &Catalog,
    ticker: &str,
    format: OutputFormat,
    language: Language,
) -> Result<()> {
    let company = lookup_company(catalog, ticker)?;
    let features = catalog.features(&company.ticker);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&features).into_diagnostic()?
            );
        }
        OutputFormat::Markdown => {
            println!(
                "# {} — {}\n",
                company.ticker,
                translate("tab.fundamentals", language)
            );
            if features.is_empty() {
                println!("{}", translate("company.no_features", language));
                return Ok(());
            }
            println!(
                "| Period | {} | {} | {} | {} | {} |",
                translate("fundamental.revenue", language),
                translate("fundamental.net_income", language),
                translate("fundamental.leverage", language),
                translate("fundamental.yoy_growth", language),
                translate("fundamental.signal", language),
            );
            println!("|--------|---------|------------|----------|------------|--------|");
            for f in features {
                let v = &f.values;
                println!(
                    "| {} | {} | {} | {} | {} | {} |",
                    f.fiscal_period,
                    fmt_opt_money(v.revenues, language),
                    fmt_opt_money(v.net_income_loss, language),
                    fmt_opt_num(v.leverage, language),
                    fmt_opt_pct(v.yoy_growth_revenues, language),
                    fmt_opt_num(v.composite_signal, language),
                );
            }
        }
        OutputFormat::Text => {
            println!(
                "{} — {}",
                company.name,
                translate("tab.fundamentals", language)
            );
            println!("{:-<72}", "");
            if features.is_empty() {
                println!("{}", translate("company.no_features", language));
                return Ok(());
            }
            for f in features {
                let v = &f.values;
                println!("{} (as of {})", f.fiscal_period, f.asof_date);
                println!(
                    "  {:<18} {}",
                    translate("fundamental.revenue", language),
                    fmt_opt_money(v.revenues, language),
                );
                println!(
                    "  {:<18} {}",
                    translate("fundamental.net_income", language),
                    fmt_opt_money(v.net_income_loss, language),
                );
                println!(
                    "  {:<18} {}",
                    translate("fundamental.assets", language),
                    fmt_opt_money(v.assets, language),
                );
                println!(
                    "  {:<18} {}",
                    translate("fundamental.leverage", language),
                    fmt_opt_num(v.leverage, language),
                );
                println!(
                    "  {:<18} {}",
                    translate("fundamental.profitability", language),
                    fmt_opt_pct(v.profitability, language),
                );
                println!(
                    "  {:<18} {}",
                    translate("fundamental.yoy_growth", language),
                    fmt_opt_pct(v.yoy_growth_revenues, language),
                );
                println!(
                    "  {:<18} {}",
                    translate("fundamental.signal", language),
                    fmt_opt_num(v.composite_signal, language),
                );
                println!();
            }
        }
    }
    Ok(())
}

fn run_tips(
    catalog: &Catalog,
    ticker: &str,
    format: OutputFormat,
    language: Language,
) -> Result<()> {
    let company = lookup_company(catalog, ticker)?;
    let tips = catalog.tips(&company.ticker);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tips).into_diagnostic()?);
        }
        OutputFormat::Markdown => {
            println!("# {} — {}\n", company.ticker, translate("tips.title", language));
            if tips.is_empty() {
                println!("{}", translate("tips.no_tips", language));
                return Ok(());
            }
            for tip in &tips {
                let category_key = match tip.category {
                    alpha_core::TipCategory::Risk => "tips.risk",
                    alpha_core::TipCategory::Opportunity => "tips.opportunity",
                    alpha_core::TipCategory::Neutral => "tips.neutral",
                };
                let explanation = match language {
                    Language::En => &tip.explanation_en,
                    Language::Zh => &tip.explanation_zh,
                };
                println!("## {}\n", translate(category_key, language));
                println!("{explanation}\n");
                println!(
                    "*{}: {:.0}% — {}: {}*\n",
                    translate("tips.confidence", language),
                    tip.confidence_score * 100.0,
                    translate("tips.complexity", language),
                    tip.complexity_level,
                );
            }
        }
        OutputFormat::Text => {
            println!("{} — {}", company.name, translate("tips.title", language));
            println!("{:-<72}", "");
            if tips.is_empty() {
                println!("{}", translate("tips.no_tips", language));
                return Ok(());
            }
            for tip in &tips {
                let category_key = match tip.category {
                    alpha_core::TipCategory::Risk => "tips.risk",
                    alpha_core::TipCategory::Opportunity => "tips.opportunity",
                    alpha_core::TipCategory::Neutral => "tips.neutral",
                };
                let explanation = match language {
                    Language::En => &tip.explanation_en,
                    Language::Zh => &tip.explanation_zh,
                };
                println!(
                    "[{}] {} ({}: {:.0}%)",
                    translate(category_key, language),
                    tip.complexity_level,
                    translate("tips.confidence", language),
                    tip.confidence_score * 100.0,
                );
                println!("  {explanation}\n");
            }
        }
    }
    Ok(())
}

fn print_backtest_result(run: &BacktestRun, format: OutputFormat, language: Language) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(run).into_diagnostic()?);
        }
        OutputFormat::Markdown => {
            println!("# {} {}\n", translate("backtest.title", language), run.run_id);
            println!(
                "**Universe:** {} — {} to {} ({})\n",
                run.config.tickers.join(", "),
                run.config.start_date,
                run.config.end_date,
                run.config.rebalance_freq,
            );
            println!("| Metric | Value |");
            println!("|--------|-------|");
            println!(
                "| {} | {} |",
                translate("backtest.cagr", language),
                fmt_opt_pct(run.metrics.cagr, language),
            );
            println!(
                "| {} | {} |",
                translate("backtest.sharpe", language),
                fmt_opt_num(run.metrics.sharpe, language),
            );
            println!(
                "| {} | {} |",
                translate("backtest.max_dd", language),
                fmt_opt_pct(run.metrics.max_drawdown, language),
            );
            println!(
                "| {} | {} |",
                translate("backtest.hit_rate", language),
                fmt_opt_pct(run.metrics.hit_rate, language),
            );
        }
        OutputFormat::Text => {
            println!("{} {}", translate("backtest.title", language), run.run_id);
            println!("{:-<72}", "");
            println!(
                "Universe: {}  |  {} to {}  |  {}",
                run.config.tickers.join(", "),
                run.config.start_date,
                run.config.end_date,
                run.config.rebalance_freq,
            );
            println!(
                "  {:<16} {}",
                translate("backtest.cagr", language),
                fmt_opt_pct(run.metrics.cagr, language),
            );
            println!(
                "  {:<16} {}",
                translate("backtest.sharpe", language),
                fmt_opt_num(run.metrics.sharpe, language),
            );
            println!(
                "  {:<16} {}",
                translate("backtest.max_dd", language),
                fmt_opt_pct(run.metrics.max_drawdown, language),
            );
            println!(
                "  {:<16} {}",
                translate("backtest.hit_rate", language),
                fmt_opt_pct(run.metrics.hit_rate, language),
            );
            if let Some(total) = run.metrics.total_return {
                println!("  {:<16} {:.1}%", "Total return", total * 100.0);
            }
            if let Some(trades) = run.metrics.num_trades {
                println!("  {:<16} {trades}", "Trades");
            }
        }
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Alpha Factory Configuration

[data]
# Directory for settings and tracked tickers
# dir = ".alpha"

[diff]
# Maximum diff lines to print before truncating
# max_lines = 400

[backtest]
# Defaults applied when 'alpha backtest' flags are omitted
# tickers = ["NVDA", "TSM", "META", "GOOG"]
# transaction_cost_bps = 10.0
# delay_ms = 2000
"#;

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AlphaConfig::from_file(path).into_diagnostic()?,
        None => {
            let default_path = std::path::Path::new(".alpha.toml");
            if default_path.exists() {
                AlphaConfig::from_file(default_path).into_diagnostic()?
            } else {
                AlphaConfig::default()
            }
        }
    };

    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    };

    let mut store = SettingsStore::load(FileStore::new(config.data.dir.clone()));
    let language = store.settings().language;
    let catalog = Catalog::mock();

    if cli.verbose {
        eprintln!("format: {}", cli.format);
        eprintln!("data dir: {}", config.data.dir.display());
        eprintln!(
            "view mode: {} | language: {} | tracked: {}",
            store.settings().view_mode,
            language,
            store.tickers().len(),
        );
    }

    match cli.command {
        None => {
            print_welcome(use_color);
        }
        Some(Command::Companies { tracked }) => {
            run_companies(&catalog, &store, tracked, cli.format, language)?;
        }
        Some(Command::Filings { ref ticker }) => {
            run_filings(&catalog, ticker, cli.format, language)?;
        }
        Some(Command::Diffs {
            ref ticker,
            ref section,
            view,
        }) => {
            let view = view.unwrap_or(store.settings().view_mode);
            run_diffs(
                &catalog,
                &config,
                ticker,
                section.as_deref(),
                view,
                cli.format,
                language,
                use_color,
            )?;
        }
        Some(Command::Fundamentals { ref ticker }) => {
            run_fundamentals(&catalog, ticker, cli.format, language)?;
        }
        Some(Command::Tips { ref ticker }) => {
            run_tips(&catalog, ticker, cli.format, language)?;
        }
        Some(Command::Backtest {
            ref tickers,
            start,
            end,
            freq,
            cost_bps,
        }) => {
            if end < start {
                miette::bail!("--end must not be before --start");
            }
            let tickers = if tickers.is_empty() {
                config.backtest.tickers.clone()
            } else {
                tickers.iter().map(|t| t.trim().to_uppercase()).collect()
            };
            let backtest_config = BacktestConfig {
                tickers,
                start_date: start,
                end_date: end,
                rebalance_freq: freq,
                transaction_cost_bps: cost_bps.unwrap_or(config.backtest.transaction_cost_bps),
            };

            let is_tty = std::io::stderr().is_terminal();
            let spinner = if is_tty {
                let pb = indicatif::ProgressBar::new_spinner();
                pb.set_style(
                    indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
                        .into_diagnostic()?,
                );
                pb.set_message(translate("backtest.running", language));
                pb.enable_steady_tick(std::time::Duration::from_millis(120));
                Some(pb)
            } else {
                None
            };

            let delay = std::time::Duration::from_millis(config.backtest.delay_ms);
            let run = run_backtest(backtest_config, delay);

            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            print_backtest_result(&run, cli.format, language)?;
        }
        Some(Command::Settings { action }) => match action {
            None | Some(SettingsCommand::Show) => {
                let settings = store.settings();
                match cli.format {
                    OutputFormat::Json => {
                        let json = serde_json::json!({
                            "settings": settings,
                            "tickers": store.tickers(),
                        });
                        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
                    }
                    _ => {
                        println!("{}", translate("settings.title", language));
                        println!("{:-<40}", "");
                        println!(
                            "  {:<16} {}",
                            translate("settings.view_mode", language),
                            settings.view_mode,
                        );
                        println!(
                            "  {:<16} {}",
                            translate("settings.language", language),
                            settings.language,
                        );
                        println!(
                            "  {:<16} {}",
                            translate("settings.notifications", language),
                            if settings.notifications_enabled { "on" } else { "off" },
                        );
                        if store.tickers().is_empty() {
                            println!("  {:<16} (none)", "Tracked");
                        } else {
                            println!("  {:<16} {}", "Tracked", store.tickers().join(", "));
                        }
                    }
                }
            }
            Some(SettingsCommand::ViewMode { mode }) => {
                store.set_view_mode(mode).into_diagnostic()?;
                println!("View mode set to {mode}");
            }
            Some(SettingsCommand::Language { language }) => {
                store.set_language(language).into_diagnostic()?;
                println!("Language set to {language}");
            }
            Some(SettingsCommand::Notifications { state }) => {
                let enabled = matches!(state, OnOff::On);
                store.set_notifications_enabled(enabled).into_diagnostic()?;
                println!(
                    "Notifications {}",
                    if enabled { "enabled" } else { "disabled" }
                );
            }
            Some(SettingsCommand::Add { ref ticker }) => {
                if ticker.trim().is_empty() {
                    miette::bail!("ticker must not be empty");
                }
                if store.add_ticker(ticker).into_diagnostic()? {
                    println!("Tracking {}", ticker.trim().to_uppercase());
                } else {
                    println!("Already tracking {}", ticker.trim().to_uppercase());
                }
            }
            Some(SettingsCommand::Remove { ref ticker }) => {
                if store.remove_ticker(ticker).into_diagnostic()? {
                    println!("Stopped tracking {}", ticker.trim().to_uppercase());
                } else {
                    println!("Not tracking {}", ticker.trim().to_uppercase());
                }
            }
            Some(SettingsCommand::Preset { preset }) => {
                store.load_preset(preset).into_diagnostic()?;
                println!("Tracked tickers: {}", store.tickers().join(", "));
            }
            Some(SettingsCommand::Clear) => {
                store.clear_tickers().into_diagnostic()?;
                println!("Cleared tracked tickers");
            }
        },
        Some(Command::Init) => {
            let path = std::path::Path::new(".alpha.toml");
            if path.exists() {
                miette::bail!(".alpha.toml already exists");
            }
            std::fs::write(path, DEFAULT_CONFIG).into_diagnostic()?;
            println!("Created .alpha.toml with default configuration");
        }
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "alpha", &mut std::io::stdout());
        }
    }

    Ok(())
}
