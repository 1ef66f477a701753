//! Bindings para os widgets globais do Bootstrap (`window.bootstrap`)

use estudos_common::WidgetFactory;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    pub type Tooltip;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    pub type Popover;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(element: &Element) -> Result<Popover, JsValue>;
}

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    #[wasm_bindgen(js_name = Toast)]
    pub type BsToast;

    /// `new bootstrap.Toast(element, { autohide, delay })`
    #[wasm_bindgen(constructor, js_class = "Toast", catch)]
    pub fn new(element: &Element, options: &JsValue) -> Result<BsToast, JsValue>;

    #[wasm_bindgen(method)]
    pub fn show(this: &BsToast);
}

/// Cria tooltips e popovers via Bootstrap; falhas só geram aviso no log
pub struct BootstrapWidgets;

impl WidgetFactory for BootstrapWidgets {
    type Element = Element;

    fn make_tooltip(&self, element: &Element) {
        if let Err(e) = Tooltip::new(element) {
            log::warn!("tooltip não inicializado: {:?}", e);
        }
    }

    fn make_popover(&self, element: &Element) {
        if let Err(e) = Popover::new(element) {
            log::warn!("popover não inicializado: {:?}", e);
        }
    }
}
