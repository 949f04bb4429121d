use crate::error_handler::AppError;

/// Listen address used when `API_ADDRESS` is not set.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:8000";

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `host:port` to bind.
    pub address: String,
}

impl ApiConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_address(std::env::var("API_ADDRESS").ok())
    }

    /// Blank or missing address falls back to [`DEFAULT_API_ADDRESS`].
    pub fn from_address(address: Option<String>) -> Result<Self, AppError> {
        let address = address
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());

        if !address.contains(':') {
            return Err(AppError::InvalidEnv {
                var: "API_ADDRESS",
                reason: "expected host:port",
            });
        }

        Ok(Self { address })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address_when_unset_or_blank() {
        assert_eq!(ApiConfig::from_address(None).unwrap().address, DEFAULT_API_ADDRESS);
        assert_eq!(
            ApiConfig::from_address(Some("  ".into())).unwrap().address,
            DEFAULT_API_ADDRESS
        );
    }

    #[test]
    fn address_without_port_is_rejected() {
        assert!(matches!(
            ApiConfig::from_address(Some("localhost".into())),
            Err(AppError::InvalidEnv { var: "API_ADDRESS", .. })
        ));
    }
}
