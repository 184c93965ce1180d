use std::env;
use std::net::SocketAddr;

/// Runtime configuration, resolved from environment overrides on top of
/// development defaults.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub bind_address: String,
    pub port: u16,
    /// Shared secret for token signing. The default is only suitable for
    /// development; deployments must override it.
    pub signing_secret: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            signing_secret: "mi_secreto_super_seguro".to_string(),
        }
    }
}

impl IdentityConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = env::var("IDENTITY_BIND_ADDRESS") {
            config.bind_address = value;
        }
        if let Ok(value) = env::var("IDENTITY_PORT") {
            match value.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(error) => {
                    tracing::warn!(%value, %error, "invalid port override, using default");
                }
            }
        }
        if let Ok(value) = env::var("IDENTITY_SIGNING_SECRET") {
            config.signing_secret = value;
        }

        config
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind_address, self.port).parse()
    }
}
