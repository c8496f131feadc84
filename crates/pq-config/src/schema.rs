//! Configuration schema definitions.

use pq_core::machine::{DEFAULT_P_MAX_MW, DEFAULT_Q_MAX_MVAR, DEFAULT_S_RATED_MVA};
use serde::{Deserialize, Serialize};

pub const DEFAULT_X_LABEL: &str = "Reactive Power Q [MVAr]";
pub const DEFAULT_Y_LABEL: &str = "Active Power P [MW]";

/// Machine rating and display settings, as read from a config file.
///
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MachineConfig {
    #[serde(rename = "S_rated_MVA")]
    pub s_rated_mva: f64,
    #[serde(rename = "P_max_MW")]
    pub p_max_mw: f64,
    #[serde(rename = "Q_max_MVAr")]
    pub q_max_mvar: f64,
    pub labels: AxisLabels,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            s_rated_mva: DEFAULT_S_RATED_MVA,
            p_max_mw: DEFAULT_P_MAX_MW,
            q_max_mvar: DEFAULT_Q_MAX_MVAR,
            labels: AxisLabels::default(),
        }
    }
}

/// Plot axis labels. `x` is the Q axis, `y` the P axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x: DEFAULT_X_LABEL.to_string(),
            y: DEFAULT_Y_LABEL.to_string(),
        }
    }
}

/// Identifies one of the three rating keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingField {
    SRated,
    PMax,
    QMax,
}

impl RatingField {
    pub const ALL: [RatingField; 3] = [Self::SRated, Self::PMax, Self::QMax];

    /// Key as written in the config file.
    pub fn key(self) -> &'static str {
        match self {
            Self::SRated => "S_rated_MVA",
            Self::PMax => "P_max_MW",
            Self::QMax => "Q_max_MVAr",
        }
    }

    /// Environment variable that overrides this key.
    pub fn env_key(self) -> &'static str {
        match self {
            Self::SRated => "PQT_S_RATED",
            Self::PMax => "PQT_P_MAX",
            Self::QMax => "PQT_Q_MAX",
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            Self::SRated => DEFAULT_S_RATED_MVA,
            Self::PMax => DEFAULT_P_MAX_MW,
            Self::QMax => DEFAULT_Q_MAX_MVAR,
        }
    }

    pub fn get(self, config: &MachineConfig) -> f64 {
        match self {
            Self::SRated => config.s_rated_mva,
            Self::PMax => config.p_max_mw,
            Self::QMax => config.q_max_mvar,
        }
    }

    pub fn set(self, config: &mut MachineConfig, value: f64) {
        match self {
            Self::SRated => config.s_rated_mva = value,
            Self::PMax => config.p_max_mw = value,
            Self::QMax => config.q_max_mvar = value,
        }
    }
}

impl std::fmt::Display for RatingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
