use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub child: ChildConfig,

    #[serde(default)]
    pub filter: FilterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChildConfig {
    #[serde(default)]
    pub shell: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Lines dropped after a trigger line, continuation of the same block.
    #[serde(default = "default_suppress_count")]
    pub suppress_count: usize,
}

fn default_suppress_count() -> usize {
    2
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            suppress_count: default_suppress_count(),
        }
    }
}

const CONFIG_FILE: &str = ".section-filter.toml";

pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut cfg = match path {
        Some(p) => {
            let s = std::fs::read_to_string(p)?;
            toml::from_str::<AppConfig>(&s)?
        }
        None if Path::new(CONFIG_FILE).exists() => {
            let s = std::fs::read_to_string(CONFIG_FILE)?;
            toml::from_str::<AppConfig>(&s)?
        }
        None => AppConfig::default(),
    };

    // env overrides (minimal)
    if let Ok(v) = std::env::var("SECTION_FILTER_SHELL") {
        if !v.trim().is_empty() {
            cfg.child.shell = v == "1" || v.eq_ignore_ascii_case("true");
        }
    }
    if let Ok(v) = std::env::var("SECTION_FILTER_SUPPRESS") {
        if let Ok(n) = v.trim().parse() {
            cfg.filter.suppress_count = n;
        }
    }

    Ok(cfg)
}
