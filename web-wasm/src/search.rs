//! Busca em tempo real ligada a um campo de texto

use crate::timers::BrowserScheduler;
use estudos_common::LiveSearch;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

/// Chama `callback(query)` com debounce de `delay_ms` a cada `input`
pub fn setup_live_search(
    input: &HtmlInputElement,
    callback: js_sys::Function,
    delay_ms: u32,
    min_len: usize,
) {
    let search = LiveSearch::new(
        move |query: String| {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&query)) {
                log::error!("callback de busca falhou: {:?}", e);
            }
        },
        delay_ms,
        min_len,
        BrowserScheduler,
    );

    let input_el = input.clone();
    EventListener::new(input, "input", move |_| search.on_input(&input_el.value())).forget();
}
