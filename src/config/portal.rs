//! Portal configuration loading from `portal.toml`
//!
//! Every section and field has a default, so an empty or missing file yields
//! the stock behaviour: 180 days of attendance history, 5% absences, 20%
//! allowances, 10% deductions and a 50 000 starting salary for signups.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default config file location, overridable with `PORTAL_CONFIG`
pub const DEFAULT_CONFIG_PATH: &str = "portal.toml";

/// Configuration structure representing the entire `portal.toml` file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortalConfig {
    /// Mock attendance generation
    pub generator: GeneratorConfig,
    /// Payslip composition
    pub payroll: PayrollConfig,
    /// Defaults applied to self-service signups
    pub signup: SignupConfig,
    /// Password hashing cost
    pub security: SecurityConfig,
}

/// Knobs for the attendance generator
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Trailing calendar days to generate, ending today
    pub history_days: u32,
    /// Probability that a working day is an absence
    pub absence_rate: f64,
    /// Probability that an attended day is late
    pub late_rate: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            history_days: 180,
            absence_rate: 0.05,
            late_rate: 0.10,
        }
    }
}

/// Allowance and deduction rates, as fractions of the base salary
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PayrollConfig {
    /// Share of the base salary added as allowances
    pub allowance_rate: f64,
    /// Share of the base salary withheld as deductions
    pub deduction_rate: f64,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            allowance_rate: 0.2,
            deduction_rate: 0.1,
        }
    }
}

/// Values given to users created through signup
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SignupConfig {
    /// Literal prefix of generated employee identifiers
    pub employee_id_prefix: String,
    /// Starting base salary
    pub default_salary: f64,
    /// Avatar service URL, the user's name is appended as the seed
    pub avatar_base_url: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            employee_id_prefix: "EMP".to_string(),
            default_salary: 50_000.0,
            avatar_base_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=".to_string(),
        }
    }
}

/// Argon2 cost parameters
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SecurityConfig {
    /// Memory cost in KiB
    pub argon2_memory_kib: u32,
    /// Number of passes
    pub argon2_iterations: u32,
    /// Degree of parallelism
    pub argon2_parallelism: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            argon2_memory_kib: argon2::Params::DEFAULT_M_COST,
            argon2_iterations: argon2::Params::DEFAULT_T_COST,
            argon2_parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

impl PortalConfig {
    /// Checks that rates are probabilities and amounts are non-negative.
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("generator.absence_rate", self.generator.absence_rate),
            ("generator.late_rate", self.generator.late_rate),
            ("payroll.allowance_rate", self.payroll.allowance_rate),
            ("payroll.deduction_rate", self.payroll.deduction_rate),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config {
                    message: format!("{name} must be between 0 and 1, got {value}"),
                });
            }
        }

        if self.signup.default_salary < 0.0 {
            return Err(Error::Config {
                message: format!(
                    "signup.default_salary cannot be negative, got {}",
                    self.signup.default_salary
                ),
            });
        }

        Ok(())
    }
}

/// Loads portal configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A rate is outside `0..=1`
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PortalConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    let config: PortalConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })?;
    config.validate()?;
    Ok(config)
}

/// Loads the configuration named by `PORTAL_CONFIG` (or `portal.toml`),
/// falling back to defaults when that file does not exist.
pub fn load_app_configuration() -> Result<PortalConfig> {
    let path = std::env::var("PORTAL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if Path::new(&path).exists() {
        let config = load_config(&path)?;
        info!("Loaded portal configuration from {}", path);
        Ok(config)
    } else {
        info!("No configuration file at {}, using defaults", path);
        Ok(PortalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let toml_str = r#"
            [generator]
            history_days = 30

            [signup]
            employee_id_prefix = "HR"
        "#;

        let config: PortalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.history_days, 30);
        assert_eq!(config.generator.absence_rate, 0.05);
        assert_eq!(config.signup.employee_id_prefix, "HR");
        assert_eq!(config.signup.default_salary, 50_000.0);
        assert_eq!(config.payroll, PayrollConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: PortalConfig = toml::from_str("").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rate() {
        let mut config = PortalConfig::default();
        config.payroll.deduction_rate = 1.5;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("payroll.deduction_rate"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let result = load_config("definitely/not/here/portal.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
