/// Database configuration and connection management
pub mod database;

/// Portal configuration loading from portal.toml
pub mod portal;

pub use portal::{
    GeneratorConfig, PayrollConfig, PortalConfig, SecurityConfig, SignupConfig,
    load_app_configuration, load_config,
};
