use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("missing {name} query param")]
    MissingParameter { name: String },

    #[error("invalid {name} value")]
    InvalidParameter { name: String, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl DiagramError {
    pub fn missing_parameter(name: &str) -> Self {
        Self::MissingParameter {
            name: name.to_string(),
        }
    }

    pub fn invalid_parameter(name: &str, value: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// 請求參數錯誤屬於客戶端錯誤，其餘皆為服務端錯誤
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter { .. } | Self::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingParameter { name } => {
                format!("Add a '{}' query parameter, e.g. ?{}=1.0", name, name)
            }
            Self::InvalidParameter { name, .. } => {
                format!("Make sure '{}' is a plain decimal number", name)
            }
            Self::IoError(_) => {
                "Check that the address is free and the files are readable".to_string()
            }
            Self::ConfigError { .. } => "Check the TOML syntax of the config file".to_string(),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or CLI flags", field)
            }
            Self::ServerError { .. } => "Restart the server and check the logs".to_string(),
        }
    }
}

impl IntoResponse for DiagramError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::warn!("⚠️ Rejected request: {}", self);
        } else {
            tracing::error!("❌ Request failed: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DiagramError>;
