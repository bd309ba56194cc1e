//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, BootstrapAccount, LogFormat, LoggingConfig, RegistrationConfig,
    RoleConfig, ServerConfig,
};
