use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

use crate::types::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub demo: DemoConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the real gateway API, used when demo mode is off
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Serve every API call from the canned fixtures instead of the network
    pub enabled: bool,
    pub default_role: Role,
    /// Interval for the dashboard snapshot refresh task
    pub refresh_secs: u64,
    pub state_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("GATEWAY_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("GATEWAY_BIND") {
            self.server.bind = v;
        }

        // API overrides
        if let Ok(v) = env::var("API_BASE_URL") {
            self.api.base_url = v;
        }
        if let Ok(v) = env::var("API_REQUEST_TIMEOUT_SECS") {
            self.api.request_timeout_secs = v.parse().unwrap_or(self.api.request_timeout_secs);
        }
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }

        // Demo overrides
        if let Ok(v) = env::var("DEMO_ENABLED") {
            self.demo.enabled = v.parse().unwrap_or(self.demo.enabled);
        }
        if let Ok(v) = env::var("DEMO_DEFAULT_ROLE") {
            self.demo.default_role = v.parse().unwrap_or(self.demo.default_role);
        }
        if let Ok(v) = env::var("DEMO_REFRESH_SECS") {
            self.demo.refresh_secs = v.parse().unwrap_or(self.demo.refresh_secs);
        }
        if let Ok(v) = env::var("DEMO_STATE_FILE") {
            self.demo.state_file = v;
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("SECURITY_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 4000,
                bind: "0.0.0.0".to_string(),
            },
            api: ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                request_timeout_secs: 30,
                enable_request_logging: true,
            },
            demo: DemoConfig {
                enabled: true,
                default_role: Role::SuperAdmin,
                refresh_secs: 30,
                state_file: "gateway-console-state.json".to_string(),
            },
            security: SecurityConfig {
                jwt_secret: "demo-console-secret".to_string(),
                jwt_expiry_hours: 24 * 7, // 1 week
                enable_cors: true,
                cors_origins: vec![
                    "http://localhost:4000".to_string(),
                    "http://localhost:5173".to_string(),
                ],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                port: 4000,
                bind: "0.0.0.0".to_string(),
            },
            api: ApiConfig {
                base_url: "https://gateway-staging.example.com/api".to_string(),
                request_timeout_secs: 10,
                enable_request_logging: true,
            },
            demo: DemoConfig {
                enabled: true,
                default_role: Role::TenantOwner,
                refresh_secs: 60,
                state_file: "gateway-console-state.json".to_string(),
            },
            security: SecurityConfig {
                jwt_secret: "demo-console-secret".to_string(),
                jwt_expiry_hours: 24,
                enable_cors: true,
                cors_origins: vec!["https://console-staging.example.com".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                port: 4000,
                bind: "0.0.0.0".to_string(),
            },
            api: ApiConfig {
                base_url: "https://gateway.example.com/api".to_string(),
                request_timeout_secs: 5,
                enable_request_logging: false,
            },
            demo: DemoConfig {
                // The console ships as a demo; there is no real backend to point at
                enabled: true,
                default_role: Role::User,
                refresh_secs: 120,
                state_file: "gateway-console-state.json".to_string(),
            },
            security: SecurityConfig {
                jwt_secret: "demo-console-secret".to_string(),
                jwt_expiry_hours: 4,
                enable_cors: true,
                cors_origins: vec!["https://console.example.com".to_string()],
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert!(config.demo.enabled);
        assert_eq!(config.demo.default_role, Role::SuperAdmin);
        assert!(config.api.enable_request_logging);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert!(config.demo.enabled);
        assert_eq!(config.security.jwt_expiry_hours, 4);
        assert!(!config.api.enable_request_logging);
    }
}
