//! Copiar texto para a área de transferência

use crate::controller::UiController;
use crate::dom;
use estudos_common::{CopyOutcome, CopyStrategy};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

#[wasm_bindgen]
extern "C" {
    /// `navigator.clipboard`
    type AsyncClipboard;

    #[wasm_bindgen(method, js_name = writeText)]
    fn write_text(this: &AsyncClipboard, text: &str) -> js_sys::Promise;
}

/// Copia `text` e avisa o resultado com um toast
pub fn copy_to_clipboard(text: &str, ui: Rc<UiController>) {
    let window = match dom::window() {
        Ok(w) => w,
        Err(e) => {
            log::error!("clipboard: {:?}", e);
            return;
        }
    };

    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null());

    match (CopyStrategy::select(clipboard.is_some(), window.is_secure_context()), clipboard) {
        (CopyStrategy::AsyncApi, Some(clipboard)) => {
            let promise = clipboard.unchecked_into::<AsyncClipboard>().write_text(text);
            spawn_local(async move {
                let outcome = match JsFuture::from(promise).await {
                    Ok(_) => CopyOutcome::Copied,
                    Err(e) => {
                        log::warn!("writeText rejeitado: {:?}", e);
                        CopyOutcome::Failed
                    }
                };
                let (message, severity) = outcome.toast();
                ui.show_toast(message, severity);
            });
        }
        _ => {
            let outcome = window
                .document()
                .ok_or_else(|| dom::js_error("document indisponível"))
                .and_then(|document| legacy_copy(&document, text))
                .unwrap_or_else(|e| {
                    log::warn!("cópia legada falhou: {:?}", e);
                    CopyOutcome::Failed
                });
            let (message, severity) = outcome.toast();
            ui.show_toast(message, severity);
        }
    }
}

/// `<textarea>` fora da tela + `execCommand("copy")`; o elemento sempre sai do DOM
fn legacy_copy(document: &Document, text: &str) -> Result<CopyOutcome, JsValue> {
    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    textarea.set_value(text);
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "0")?;
    style.set_property("left", "-9999px")?;

    dom::body(document)?.append_child(&textarea)?;
    textarea.select();

    let command = document
        .dyn_ref::<HtmlDocument>()
        .ok_or(())
        .and_then(|html| html.exec_command("copy").map_err(|_| ()));
    textarea.remove();

    Ok(CopyOutcome::from_command(command))
}
