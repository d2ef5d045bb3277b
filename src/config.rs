//! Dashboard Configuration
//!
//! Read once at start-up from globals the host page may set before loading
//! the wasm bundle:
//!
//! ```html
//! <script>window.MARKET_API_BASE = "http://127.0.0.1:5000";</script>
//! ```

use log::{Level, LevelFilter};

pub const API_BASE_KEY: &str = "MARKET_API_BASE";
pub const LOG_LEVEL_KEY: &str = "MARKET_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix for every endpoint path; empty means same origin
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: LevelFilter::Info,
        }
    }
}

impl DashboardConfig {
    /// Build from any key lookup; unknown or blank values keep the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base) = lookup(API_BASE_KEY) {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(level) = lookup(LOG_LEVEL_KEY) {
            if let Ok(parsed) = level.trim().parse::<LevelFilter>() {
                config.log_level = parsed;
            }
        }
        config
    }

    /// Level handed to the console logger; `None` when logging is off
    pub fn console_level(&self) -> Option<Level> {
        self.log_level.to_level()
    }

    /// Read from `window` globals
    pub fn from_window() -> Self {
        Self::from_lookup(read_global)
    }
}

fn read_global(key: &str) -> Option<String> {
    js_sys::Reflect::get(&js_sys::global(), &wasm_bindgen::JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}
