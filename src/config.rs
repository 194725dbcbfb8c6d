//! Page UI configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled:
//! - `PAGE_UI_STORAGE_NAMESPACE`: prefix for every `localStorage` key
//!   (default `page_ui`)
//! - `PAGE_UI_LOG`: console log level, `error` through `trace` (default `info`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_NAMESPACE: &str = "page_ui";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub storage_namespace: String,
    pub log_level: LogLevel,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { storage_namespace: DEFAULT_STORAGE_NAMESPACE.to_owned(), log_level: LogLevel::default() }
    }
}

impl UiConfig {
    /// Config from the variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PAGE_UI_STORAGE_NAMESPACE"), option_env!("PAGE_UI_LOG"))
    }

    /// Blank or unparseable values fall back to defaults.
    pub fn from_values(namespace: Option<&str>, log_level: Option<&str>) -> Self {
        let storage_namespace = namespace
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
            .unwrap_or(DEFAULT_STORAGE_NAMESPACE)
            .to_owned();
        let log_level = log_level
            .and_then(|raw| raw.parse::<LogLevel>().ok())
            .unwrap_or_default();
        Self { storage_namespace, log_level }
    }

    /// `localStorage` key holding the accordion's explicit section state.
    pub fn accordion_storage_key(&self) -> String {
        format!("{}_accordion", self.storage_namespace)
    }
}
