//! `window.AssistenteEstudos`: as funções públicas para outros scripts da página

use crate::ajax::make_ajax_request_js;
use crate::clipboard::copy_to_clipboard;
use crate::controller::UiController;
use crate::dom;
use crate::files::setup_file_preview;
use crate::search::setup_live_search;
use crate::timers::BrowserScheduler;
use chrono::Utc;
use estudos_common::{
    format_date, time_ago, validate_file, Debounced, FileInfo, FileRules, Severity,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{HtmlElement, HtmlInputElement};

pub const NAMESPACE: &str = "AssistenteEstudos";

/// Texto devolvido por `formatDate` para entradas que não são datas
const INVALID_DATE: &str = "Invalid Date";

pub fn install(ui: Rc<UiController>) -> Result<(), JsValue> {
    let ns = js_sys::Object::new();

    set(&ns, "makeAjaxRequest", ajax_fn())?;
    set(&ns, "showToast", show_toast_fn(Rc::clone(&ui)))?;
    set(&ns, "formatDate", format_date_fn(Rc::clone(&ui)))?;
    set(&ns, "timeAgo", time_ago_fn(Rc::clone(&ui)))?;
    set(&ns, "validateFile", validate_file_fn(Rc::clone(&ui)))?;
    set(&ns, "setupFilePreview", file_preview_fn(Rc::clone(&ui)))?;
    set(&ns, "setupLiveSearch", live_search_fn(Rc::clone(&ui)))?;
    set(&ns, "copyToClipboard", clipboard_fn(ui))?;
    set(&ns, "debounce", debounce_fn())?;

    js_sys::Reflect::set(&dom::window()?.into(), &JsValue::from_str(NAMESPACE), &ns)?;
    Ok(())
}

fn set(ns: &js_sys::Object, name: &str, value: JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(ns, &JsValue::from_str(name), &value).map(|_| ())
}

fn string_arg(value: &JsValue) -> String {
    value.as_string().unwrap_or_default()
}

/// Strings passam direto; `Date`, números e demais valores seguem `new Date(x)`
fn date_arg(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    let date = js_sys::Date::new(value);
    if date.get_time().is_nan() {
        return String::new();
    }
    date.to_iso_string().into()
}

fn ajax_fn() -> JsValue {
    Closure::<dyn Fn(JsValue, JsValue) -> js_sys::Promise>::new(|url: JsValue, options: JsValue| {
        let url = string_arg(&url);
        future_to_promise(async move { make_ajax_request_js(&url, options).await })
    })
    .into_js_value()
}

fn show_toast_fn(ui: Rc<UiController>) -> JsValue {
    Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
        let severity = kind
            .as_string()
            .map(|k| Severity::parse(&k))
            .unwrap_or_default();
        ui.show_toast(&string_arg(&message), severity);
    })
    .into_js_value()
}

fn format_date_fn(ui: Rc<UiController>) -> JsValue {
    Closure::<dyn Fn(JsValue, JsValue) -> String>::new(move |input: JsValue, include_time: JsValue| {
        format_date(&date_arg(&input), include_time.is_truthy(), ui.tz()).unwrap_or_else(|e| {
            log::warn!("formatDate: {}", e);
            INVALID_DATE.to_string()
        })
    })
    .into_js_value()
}

fn time_ago_fn(ui: Rc<UiController>) -> JsValue {
    Closure::<dyn Fn(JsValue) -> String>::new(move |input: JsValue| {
        time_ago(&date_arg(&input), Utc::now(), ui.tz()).unwrap_or_else(|e| {
            log::warn!("timeAgo: {}", e);
            "agora mesmo".to_string()
        })
    })
    .into_js_value()
}

/// Aceita `File` ou qualquer objeto com `name` e `size`
fn file_info_from_js(file: &JsValue) -> FileInfo {
    let name = js_sys::Reflect::get(file, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let size = js_sys::Reflect::get(file, &JsValue::from_str("size"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    FileInfo::new(name, size.max(0.0) as u64)
}

fn validate_file_fn(ui: Rc<UiController>) -> JsValue {
    Closure::<dyn Fn(JsValue, JsValue, JsValue) -> JsValue>::new(
        move |file: JsValue, max_size_mb: JsValue, allowed: JsValue| {
            let defaults = ui.file_rules();
            let rules = FileRules {
                max_size_mb: max_size_mb.as_f64().unwrap_or(defaults.max_size_mb),
                allowed_types: allowed
                    .dyn_ref::<js_sys::Array>()
                    .map(|list| list.iter().filter_map(|v| v.as_string()).collect())
                    .unwrap_or(defaults.allowed_types),
            };
            match validate_file(&file_info_from_js(&file), &rules) {
                Ok(()) => JsValue::NULL,
                Err(err) => JsValue::from_str(&err.to_string()),
            }
        },
    )
    .into_js_value()
}

fn file_preview_fn(ui: Rc<UiController>) -> JsValue {
    Closure::<dyn Fn(JsValue, JsValue)>::new(move |input: JsValue, preview: JsValue| {
        match (
            input.dyn_into::<HtmlInputElement>(),
            preview.dyn_into::<HtmlElement>(),
        ) {
            (Ok(input), Ok(preview)) => setup_file_preview(&input, &preview, Rc::clone(&ui)),
            _ => log::error!("setupFilePreview: elementos inválidos"),
        }
    })
    .into_js_value()
}

fn live_search_fn(ui: Rc<UiController>) -> JsValue {
    Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(
        move |input: JsValue, callback: JsValue, delay: JsValue| {
            let delay_ms = delay
                .as_f64()
                .map(|d| d.max(0.0) as u32)
                .unwrap_or(ui.config().search_delay_ms);
            match (
                input.dyn_into::<HtmlInputElement>(),
                callback.dyn_into::<js_sys::Function>(),
            ) {
                (Ok(input), Ok(callback)) => {
                    setup_live_search(&input, callback, delay_ms, ui.config().min_query_len)
                }
                _ => log::error!("setupLiveSearch: argumentos inválidos"),
            }
        },
    )
    .into_js_value()
}

fn clipboard_fn(ui: Rc<UiController>) -> JsValue {
    Closure::<dyn Fn(JsValue)>::new(move |text: JsValue| {
        copy_to_clipboard(&string_arg(&text), Rc::clone(&ui));
    })
    .into_js_value()
}

/// `debounce(func, wait)`; a função devolvida repassa até três argumentos
fn debounce_fn() -> JsValue {
    Closure::<dyn Fn(JsValue, JsValue) -> JsValue>::new(|func: JsValue, wait: JsValue| {
        let Ok(func) = func.dyn_into::<js_sys::Function>() else {
            log::error!("debounce: func não é uma função");
            return JsValue::UNDEFINED;
        };
        let wait_ms = wait.as_f64().map(|w| w.max(0.0) as u32).unwrap_or(0);

        let debounced = Debounced::new(
            move |(a, b, c): (JsValue, JsValue, JsValue)| {
                if let Err(e) = func.call3(&JsValue::NULL, &a, &b, &c) {
                    log::error!("função com debounce falhou: {:?}", e);
                }
            },
            wait_ms,
            BrowserScheduler,
        );

        Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(move |a, b, c| debounced.call((a, b, c)))
            .into_js_value()
    })
    .into_js_value()
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_file_info_from_plain_object() {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"name".into(), &"x.exe".into()).unwrap();
        js_sys::Reflect::set(&obj, &"size".into(), &JsValue::from_f64(100.0)).unwrap();

        let info = file_info_from_js(&obj);
        assert_eq!(info, FileInfo::new("x.exe", 100));
    }

    #[wasm_bindgen_test]
    fn wasm_date_arg_accepts_epoch_and_date() {
        assert_eq!(date_arg(&JsValue::from_f64(0.0)), "1970-01-01T00:00:00.000Z");

        let date = js_sys::Date::new(&JsValue::from_str("2024-03-05T14:30:00Z"));
        assert_eq!(date_arg(&date.into()), "2024-03-05T14:30:00.000Z");

        assert_eq!(date_arg(&JsValue::from_str("2024-03-05")), "2024-03-05");
        assert_eq!(date_arg(&JsValue::UNDEFINED), "");
    }

    #[wasm_bindgen_test]
    fn wasm_date_arg_feeds_format_date() {
        let tz = chrono_tz::America::Sao_Paulo;
        let epoch = date_arg(&JsValue::from_f64(1_709_649_000_000.0));
        assert_eq!(format_date(&epoch, true, tz).unwrap(), "05/03/2024, 11:30");
    }
}
