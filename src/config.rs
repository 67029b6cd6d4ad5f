use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::core::bootstrap::DEFAULT_ITERATIONS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default = "BootstrapConfig::default_iterations")]
    pub iterations: usize,
    /// Fixed seed for reproducible draws; OS entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl BootstrapConfig {
    fn default_iterations() -> usize {
        DEFAULT_ITERATIONS
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            iterations: Self::default_iterations(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortConfig {
    /// 2010 population (thousands) separating the large and small cohorts.
    #[serde(default = "CohortConfig::default_size_threshold")]
    pub size_threshold: f64,
}

impl CohortConfig {
    fn default_size_threshold() -> f64 {
        2000.0
    }
}

impl Default for CohortConfig {
    fn default() -> Self {
        Self {
            size_threshold: Self::default_size_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "FigureConfig::default_width")]
    pub width: u32,
    #[serde(default = "FigureConfig::default_height")]
    pub height: u32,
    #[serde(default = "FigureConfig::default_jitter_alpha")]
    pub jitter_alpha: f64,
    #[serde(default = "FigureConfig::default_font")]
    pub font: String,
}

impl FigureConfig {
    // 8 x 3 inches at 300 dpi
    fn default_width() -> u32 {
        2400
    }
    fn default_height() -> u32 {
        900
    }
    fn default_jitter_alpha() -> f64 {
        0.1
    }
    fn default_font() -> String {
        "sans-serif".to_string()
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            jitter_alpha: Self::default_jitter_alpha(),
            font: Self::default_font(),
        }
    }
}

/// Y-axis limits as `[lo, hi]`, shared by the left and right axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxesConfig {
    #[serde(default = "AxesConfig::default_rates_linear")]
    pub rates_linear: [f64; 2],
    #[serde(default = "AxesConfig::default_rates_log")]
    pub rates_log: [f64; 2],
    #[serde(default = "AxesConfig::default_density")]
    pub density_linear: [f64; 2],
    #[serde(default = "AxesConfig::default_density")]
    pub density_log: [f64; 2],
}

impl AxesConfig {
    fn default_rates_linear() -> [f64; 2] {
        [0.0, 12.0]
    }
    fn default_rates_log() -> [f64; 2] {
        [0.1, 12.0]
    }
    fn default_density() -> [f64; 2] {
        [1.0, 60.0]
    }
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            rates_linear: Self::default_rates_linear(),
            rates_log: Self::default_rates_log(),
            density_linear: Self::default_density(),
            density_log: Self::default_density(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    #[serde(default)]
    pub cohorts: CohortConfig,
    #[serde(default)]
    pub figure: FigureConfig,
    #[serde(default)]
    pub axes: AxesConfig,
}

impl AppConfig {
    /// Reads `path`, or writes a fully commented-out default file there and
    /// returns the defaults. Unreadable or malformed files fall back to
    /// defaults with a warning.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, Self::commented(&text)) {
                    warn!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => warn!("Failed to serialize default config: {err}"),
        }
        default_cfg
    }

    /// Comments out every key line, keeping section headers, so the written
    /// file documents the defaults without pinning them.
    fn commented(text: &str) -> String {
        let mut out = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || (trimmed.starts_with('[') && trimmed.ends_with(']')) {
                out.push_str(line);
            } else {
                out.push_str("# ");
                out.push_str(line);
            }
            out.push('\n');
        }
        out
    }
}
