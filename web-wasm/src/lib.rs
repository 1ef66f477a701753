//! Assistente de Estudos - interface no navegador (WASM)
//!
//! Na carga do módulo: configura log, cria o `UiController`, publica
//! `window.AssistenteEstudos` e inicializa os widgets da página.

mod ajax;
mod bootstrap;
mod clipboard;
mod controller;
mod dom;
mod files;
mod namespace;
mod page;
mod search;
mod timers;
mod toast;

pub use ajax::make_ajax_request;
pub use controller::UiController;

use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    let config = controller::load_config(&document);
    if console_log::init_with_level(config.log_level()).is_err() {
        web_sys::console::warn_1(&"logger já inicializado".into());
    }

    let ui = Rc::new(UiController::new(config, document.clone())?);
    namespace::install(ui)?;

    page::init_when_ready(&document)
}
