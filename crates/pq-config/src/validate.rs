//! Override application and fallback validation.
//!
//! Bad values never abort startup. Each one is replaced and reported as a
//! [`ConfigWarning`] that a front end can show as a banner.

use crate::env::{EnvSource, Override, read_override};
use crate::schema::{MachineConfig, RatingField};
use std::path::PathBuf;
use tracing::warn;

/// Recoverable problem found while building the effective configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    #[error("Failed to read {} ({reason}); falling back to defaults.", path.display())]
    FileUnreadable { path: PathBuf, reason: String },

    #[error("Ignoring {key}={raw:?}: not a number.")]
    UnparseableEnv { key: &'static str, raw: String },

    #[error("{field} must be positive; using default value.")]
    NonPositive { field: RatingField, value: f64 },

    #[error("{field} ({value}) exceeds S_rated_MVA ({s_rated}); capped to rating.")]
    ExceedsRating {
        field: RatingField,
        value: f64,
        s_rated: f64,
    },
}

/// Apply environment overrides, then replace anything that would not make a
/// valid machine.
///
/// - unparseable overrides are ignored (the file value stays)
/// - non-positive or non-finite values fall back to the documented default
/// - `P_max`/`Q_max` above `S_rated` are capped to `S_rated`
pub fn apply_overrides(
    mut config: MachineConfig,
    env: &dyn EnvSource,
    warnings: &mut Vec<ConfigWarning>,
) -> MachineConfig {
    for field in RatingField::ALL {
        match read_override(env, field.env_key()) {
            Override::Absent => {}
            Override::Value(v) => field.set(&mut config, v),
            Override::Unparseable(raw) => push(
                warnings,
                ConfigWarning::UnparseableEnv {
                    key: field.env_key(),
                    raw,
                },
            ),
        }

        let value = field.get(&config);
        if !(value.is_finite() && value > 0.0) {
            push(warnings, ConfigWarning::NonPositive { field, value });
            field.set(&mut config, field.default_value());
        }
    }

    let s_rated = config.s_rated_mva;
    for field in [RatingField::PMax, RatingField::QMax] {
        let value = field.get(&config);
        if value > s_rated {
            push(
                warnings,
                ConfigWarning::ExceedsRating {
                    field,
                    value,
                    s_rated,
                },
            );
            field.set(&mut config, s_rated);
        }
    }

    config
}

fn push(warnings: &mut Vec<ConfigWarning>, warning: ConfigWarning) {
    warn!("{warning}");
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env() -> HashMap<&'static str, &'static str> {
        HashMap::new()
    }

    #[test]
    fn defaults_pass_cleanly() {
        let mut warnings = Vec::new();
        let cfg = apply_overrides(MachineConfig::default(), &no_env(), &mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(cfg, MachineConfig::default());
    }

    #[test]
    fn env_overrides_file_values() {
        let env = HashMap::from([("PQT_S_RATED", "80"), ("PQT_Q_MAX", "20")]);
        let mut warnings = Vec::new();
        let cfg = apply_overrides(MachineConfig::default(), &env, &mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(cfg.s_rated_mva, 80.0);
        assert_eq!(cfg.p_max_mw, 50.0);
        assert_eq!(cfg.q_max_mvar, 20.0);
    }

    #[test]
    fn non_positive_falls_back_to_default() {
        let env = HashMap::from([("PQT_P_MAX", "-5")]);
        let mut warnings = Vec::new();
        let cfg = apply_overrides(MachineConfig::default(), &env, &mut warnings);
        assert_eq!(cfg.p_max_mw, 50.0);
        assert_eq!(
            warnings,
            vec![ConfigWarning::NonPositive {
                field: RatingField::PMax,
                value: -5.0
            }]
        );
        assert_eq!(
            warnings[0].to_string(),
            "P_max_MW must be positive; using default value."
        );
    }

    #[test]
    fn unparseable_env_keeps_file_value() {
        let file = MachineConfig {
            s_rated_mva: 60.0,
            ..MachineConfig::default()
        };
        let env = HashMap::from([("PQT_S_RATED", "big")]);
        let mut warnings = Vec::new();
        let cfg = apply_overrides(file, &env, &mut warnings);
        assert_eq!(cfg.s_rated_mva, 60.0);
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::UnparseableEnv { key: "PQT_S_RATED", .. }]
        ));
    }

    #[test]
    fn axis_limits_capped_to_rating() {
        let env = HashMap::from([("PQT_S_RATED", "20")]);
        let mut warnings = Vec::new();
        let cfg = apply_overrides(MachineConfig::default(), &env, &mut warnings);
        assert_eq!(cfg.s_rated_mva, 20.0);
        assert_eq!(cfg.p_max_mw, 20.0);
        assert_eq!(cfg.q_max_mvar, 20.0);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn nan_is_rejected() {
        let env = HashMap::from([("PQT_Q_MAX", "NaN")]);
        let mut warnings = Vec::new();
        let cfg = apply_overrides(MachineConfig::default(), &env, &mut warnings);
        assert_eq!(cfg.q_max_mvar, 35.0);
        assert_eq!(warnings.len(), 1);
    }
}
