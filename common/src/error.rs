//! Tipos de erro

use thiserror::Error;

/// Erro comum
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Data inválida: {0}")]
    InvalidDate(String),

    /// Resposta HTTP fora da faixa 2xx
    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("DOM error: {0}")]
    Dom(String),
}

/// Alias de Result
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http() {
        let error = Error::Http(404);
        assert_eq!(format!("{}", error), "HTTP error! status: 404");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("fuso horário desconhecido".to_string());
        assert_eq!(format!("{}", error), "Config error: fuso horário desconhecido");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidDate("ontem".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidDate"));
        assert!(debug.contains("ontem"));
    }
}
