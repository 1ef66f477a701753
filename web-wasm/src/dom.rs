//! Acesso ao DOM sem pânico: ausência de `window`/`document` vira erro

use estudos_common::Error;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| js_error("window indisponível"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| js_error("document indisponível"))
}

pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document.body().ok_or_else(|| js_error("body ausente"))
}

/// `querySelectorAll` como `Vec<Element>`
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

/// Erro comum → `Error` do JavaScript
pub fn to_js(err: Error) -> JsValue {
    js_error(&err.to_string())
}

/// `JsValue` de erro → `Error::Dom`
pub fn from_js(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Dom(message)
}

#[cfg(all(target_arch = "wasm32", test))]
pub(crate) mod testing {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::prelude::*;

    const LAST_CONFIRM_KEY: &str = "__ultimaConfirmacao";

    /// `window.bootstrap` falso; `toast_body` roda no construtor de `Toast`
    pub fn install_bootstrap(toast_body: &str) {
        let window = super::window().unwrap();
        let ns = Object::new();
        let noop = Function::new_with_args("element", "");
        let toast = Function::new_with_args(
            "element, options",
            &format!("{} this.show = function () {{}};", toast_body),
        );
        Reflect::set(&ns, &"Tooltip".into(), &noop).unwrap();
        Reflect::set(&ns, &"Popover".into(), &noop).unwrap();
        Reflect::set(&ns, &"Toast".into(), &toast).unwrap();
        Reflect::set(&window, &"bootstrap".into(), &ns).unwrap();
    }

    /// `window.confirm` responde `answer` e guarda a mensagem recebida
    pub fn stub_confirm(answer: bool) {
        let window = super::window().unwrap();
        let confirm = Function::new_with_args(
            "message",
            &format!("window.{} = message; return {};", LAST_CONFIRM_KEY, answer),
        );
        Reflect::set(&window, &LAST_CONFIRM_KEY.into(), &JsValue::UNDEFINED).unwrap();
        Reflect::set(&window, &"confirm".into(), &confirm).unwrap();
    }

    pub fn last_confirm_message() -> Option<String> {
        let window = super::window().unwrap();
        Reflect::get(&window, &LAST_CONFIRM_KEY.into())
            .ok()
            .and_then(|v| v.as_string())
    }
}
