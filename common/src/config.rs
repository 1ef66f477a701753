//! Configuração da interface
//!
//! A página pode embutir um `<script type="application/json">` com overrides;
//! qualquer campo ausente cai no padrão.

use crate::error::{Error, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Id do elemento `<script>` que carrega a configuração
pub const CONFIG_ELEMENT_ID: &str = "assistente-estudos-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    /// Título exibido no cabeçalho dos toasts
    pub app_title: String,
    pub toast_delay_ms: u32,
    pub max_upload_mb: f64,
    pub allowed_extensions: Vec<String>,
    pub search_delay_ms: u32,
    pub min_query_len: usize,
    /// Nome IANA do fuso usado na formatação de datas
    pub time_zone: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            app_title: "Assistente de Estudos".into(),
            toast_delay_ms: 5000,
            max_upload_mb: 50.0,
            allowed_extensions: [".pdf", ".txt", ".doc", ".docx", ".md"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            search_delay_ms: 300,
            min_query_len: 2,
            time_zone: "America/Sao_Paulo".into(),
            log_level: "info".into(),
        }
    }
}

impl UiConfig {
    /// Lê a configuração a partir do JSON embutido na página
    pub fn from_json(json: &str) -> Result<Self> {
        let config: UiConfig = serde_json::from_str(json)?;
        config.tz()?;
        Ok(config)
    }

    pub fn tz(&self) -> Result<Tz> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|e| Error::Config(format!("fuso horário inválido '{}': {}", self.time_zone, e)))
    }

    /// Nível de log; valores desconhecidos viram `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.toast_delay_ms, 5000);
        assert_eq!(config.search_delay_ms, 300);
        assert_eq!(config.allowed_extensions.len(), 5);
        assert_eq!(config.tz().unwrap(), chrono_tz::America::Sao_Paulo);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = UiConfig::from_json(r#"{"toastDelayMs": 8000, "appTitle": "Estudos"}"#)
            .expect("JSON válido");
        assert_eq!(config.toast_delay_ms, 8000);
        assert_eq!(config.app_title, "Estudos");
        assert_eq!(config.max_upload_mb, 50.0);
    }

    #[test]
    fn test_from_json_rejects_unknown_time_zone() {
        let result = UiConfig::from_json(r#"{"timeZone": "Marte/Olympus"}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = UiConfig::from_json("{");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_log_level_fallback() {
        let mut config = UiConfig::default();
        config.log_level = "debug".into();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "barulhento".into();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
