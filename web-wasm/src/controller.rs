//! Controlador da interface: configuração, fuso e toasts
//!
//! Criado uma vez na inicialização do módulo e compartilhado via `Rc` com os
//! tratadores de evento e o namespace global.

use crate::dom;
use crate::toast::DomToastHost;
use chrono_tz::Tz;
use estudos_common::config::CONFIG_ELEMENT_ID;
use estudos_common::{FileRules, Severity, Toaster, UiConfig};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub struct UiController {
    config: UiConfig,
    tz: Tz,
    toaster: Toaster<DomToastHost>,
}

impl UiController {
    pub fn new(config: UiConfig, document: Document) -> Result<Self, JsValue> {
        let tz = config.tz().map_err(dom::to_js)?;
        let toaster = Toaster::new(
            DomToastHost::new(document),
            config.app_title.clone(),
            config.toast_delay_ms,
        );
        Ok(Self { config, tz, toaster })
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn file_rules(&self) -> FileRules {
        FileRules::from(&self.config)
    }

    /// Falhas ao montar o toast só vão para o log
    pub fn show_toast(&self, message: &str, severity: Severity) {
        if let Err(e) = self.toaster.show(message, severity, dom::now_ms()) {
            log::error!("falha ao exibir toast: {}", e);
        }
    }
}

/// Lê a configuração embutida na página; ausente ou inválida → padrão
pub fn load_config(document: &Document) -> UiConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return UiConfig::default();
    };

    // o logger ainda não existe aqui
    UiConfig::from_json(&json).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("configuração ignorada: {}", e).into());
        UiConfig::default()
    })
}
