use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::{Capability, MailPolicy, Role, RoleId};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub registration: RegistrationConfig,
    pub roles: Vec<RoleConfig>,
    /// role id -> capabilities it confers
    pub permissions: HashMap<String, Vec<Capability>>,
    pub bootstrap: Option<BootstrapAccount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Path segment the resource is mounted under
    pub resource_path: String,
    pub mail_policy: MailPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleConfig {
    pub id: String,
    pub label: String,
    #[serde(default = "default_assignable")]
    pub assignable: bool,
}

fn default_assignable() -> bool {
    true
}

impl From<&RoleConfig> for Role {
    fn from(config: &RoleConfig) -> Self {
        Role::new(RoleId::new(&config.id), &config.label, config.assignable)
    }
}

/// Account created at startup when the store is empty
#[derive(Clone, Deserialize)]
pub struct BootstrapAccount {
    pub name: String,
    pub pass: String,
    #[serde(default)]
    pub mail: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl std::fmt::Debug for BootstrapAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAccount")
            .field("name", &self.name)
            .field("pass", &"[hidden]")
            .field("mail", &self.mail)
            .field("roles", &self.roles)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            auth: AuthConfig::default(),
            registration: RegistrationConfig::default(),
            roles: default_roles(),
            permissions: default_permissions(),
            bootstrap: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-in-production".to_string(),
            token_ttl_hours: 24,
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            resource_path: "user-registration".to_string(),
            mail_policy: MailPolicy::default(),
        }
    }
}

fn default_roles() -> Vec<RoleConfig> {
    [
        (RoleId::ANONYMOUS, "anonymous user", false),
        (RoleId::AUTHENTICATED, "authenticated user", true),
        ("administrator", "administrator", true),
    ]
    .into_iter()
    .map(|(id, label, assignable)| RoleConfig {
        id: id.to_string(),
        label: label.to_string(),
        assignable,
    })
    .collect()
}

fn default_permissions() -> HashMap<String, Vec<Capability>> {
    HashMap::from([
        (RoleId::ANONYMOUS.to_string(), vec![Capability::RegisterUser]),
        (
            "administrator".to_string(),
            vec![Capability::RegisterUser, Capability::UpdateUser],
        ),
    ])
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Roles to seed the registry with
    pub fn role_set(&self) -> Vec<Role> {
        self.roles.iter().map(Role::from).collect()
    }

    /// Resource path with surrounding slashes removed
    pub fn resource_path(&self) -> &str {
        self.registration.resource_path.trim_matches('/')
    }
}
