//! Requisições AJAX com token CSRF

use crate::dom;
use estudos_common::ajax::{check_status, CSRF_FIELD_SELECTOR};
use estudos_common::RequestOptions;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlInputElement, Request, RequestInit, Response};

/// Valor do campo oculto `csrfmiddlewaretoken`, se existir
pub fn csrf_token(document: &Document) -> Option<String> {
    document
        .query_selector(CSRF_FIELD_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Envia a requisição e devolve o corpo JSON da resposta
///
/// Status fora de 2xx vira erro `HTTP error! status: N`. Toda falha é
/// registrada no console e repassada ao chamador.
pub async fn make_ajax_request(url: &str, options: RequestOptions) -> Result<JsValue, JsValue> {
    logged(send(url, options).await)
}

/// Variante chamada pelo JavaScript: as opções chegam cruas e a falha ao
/// interpretá-las também passa pelo log
pub async fn make_ajax_request_js(url: &str, options: JsValue) -> Result<JsValue, JsValue> {
    match parse_request_options(options) {
        Ok(options) => make_ajax_request(url, options).await,
        Err(e) => logged(Err(e)),
    }
}

/// `undefined`/`null` usam as opções padrão
pub fn parse_request_options(value: JsValue) -> Result<RequestOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(RequestOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

fn logged(result: Result<JsValue, JsValue>) -> Result<JsValue, JsValue> {
    if let Err(e) = &result {
        log::error!("Erro na requisição: {:?}", e);
    }
    result
}

async fn send(url: &str, options: RequestOptions) -> Result<JsValue, JsValue> {
    let document = dom::document()?;
    let prepared = options.prepare(csrf_token(&document).as_deref());

    let init = RequestInit::new();
    init.set_method(prepared.method.as_str());
    if let Some(body) = &prepared.body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init)?;
    for (name, value) in &prepared.headers {
        request.headers().set(name, value)?;
    }

    let window = dom::window()?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    check_status(resp.status()).map_err(dom::to_js)?;

    JsFuture::from(resp.json()?).await
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_csrf_token_read_from_hidden_field() {
        let document = dom::document().unwrap();
        assert_eq!(csrf_token(&document), None);

        let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
        input.set_type("hidden");
        input.set_name("csrfmiddlewaretoken");
        input.set_value("tok123");
        dom::body(&document).unwrap().append_child(&input).unwrap();

        assert_eq!(csrf_token(&document).as_deref(), Some("tok123"));
        input.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_parse_request_options_defaults() {
        let opts = parse_request_options(JsValue::UNDEFINED).unwrap();
        assert!(opts.method.is_none());
        assert!(opts.headers.is_empty());
    }

    #[wasm_bindgen_test]
    async fn wasm_not_found_rejects_with_status() {
        let err = make_ajax_request_js("/rota-que-nao-existe.json", JsValue::UNDEFINED)
            .await
            .expect_err("404 deve falhar");

        assert!(dom::from_js(err).to_string().contains("HTTP error! status: 404"));
    }

    #[wasm_bindgen_test]
    async fn wasm_malformed_options_reject() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"method".into(), &JsValue::from_f64(42.0)).unwrap();

        let result = make_ajax_request_js("/rota-que-nao-existe.json", options.into()).await;
        assert!(result.is_err());
    }
}
