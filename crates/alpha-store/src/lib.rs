//! Persistent settings and tracked-ticker state.
//!
//! Persistence is an injected capability: [`KeyValue`] is the opaque
//! get/set/remove interface, [`FileStore`] the on-disk implementation, and
//! [`SettingsStore`] the load-on-start / save-on-change state object passed
//! to the views that need it.

mod kv;
mod settings;

pub use kv::{FileStore, KeyValue, MemoryStore};
pub use settings::{Preset, SettingsStore, FAANG_TICKERS, STAN_PORTFOLIO};
