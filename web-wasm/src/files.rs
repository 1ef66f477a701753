//! Preview de arquivo no `<input type="file">`

use crate::controller::UiController;
use estudos_common::{validate_file, FileInfo, FilePreview, Severity};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::{File, HtmlElement, HtmlInputElement};

pub fn file_info(file: &File) -> FileInfo {
    FileInfo::new(file.name(), file.size() as u64)
}

/// Valida o arquivo escolhido e mostra nome, tamanho e tipo em `preview`
///
/// Arquivo inválido: toast de erro, input e preview limpos.
pub fn setup_file_preview(input: &HtmlInputElement, preview: &HtmlElement, ui: Rc<UiController>) {
    let input_el = input.clone();
    let preview = preview.clone();

    EventListener::new(input, "change", move |_| {
        let Some(file) = input_el.files().and_then(|files| files.get(0)) else {
            preview.set_inner_html("");
            return;
        };

        let info = file_info(&file);
        if let Err(err) = validate_file(&info, &ui.file_rules()) {
            ui.show_toast(&err.to_string(), Severity::Error);
            input_el.set_value("");
            preview.set_inner_html("");
            return;
        }

        preview.set_inner_html(&FilePreview::from(&info).to_html());
    })
    .forget();
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::dom;
    use estudos_common::UiConfig;
    use wasm_bindgen::prelude::*;
    use web_sys::{DataTransfer, Event};

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    /// Input de arquivo já com `name` selecionado (10 bytes)
    fn file_input(name: &str) -> HtmlInputElement {
        let document = dom::document().unwrap();
        let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
        input.set_type("file");

        let bits = js_sys::Array::of1(&JsValue::from_str("0123456789"));
        let file = File::new_with_str_sequence(&bits, name).unwrap();
        let transfer = DataTransfer::new().unwrap();
        transfer.items().add_with_file(&file).unwrap();
        input.set_files(transfer.files().as_ref());
        input
    }

    fn controller(max_upload_mb: f64) -> Rc<UiController> {
        let config = UiConfig { max_upload_mb, ..Default::default() };
        Rc::new(UiController::new(config, dom::document().unwrap()).unwrap())
    }

    fn preview_area() -> HtmlElement {
        let preview: HtmlElement = dom::document()
            .unwrap()
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        preview.set_inner_html("anterior");
        preview
    }

    #[wasm_bindgen_test::wasm_bindgen_test]
    fn wasm_oversized_file_resets_input_and_shows_error() {
        dom::testing::install_bootstrap("");
        let input = file_input("resumo.pdf");
        let preview = preview_area();
        setup_file_preview(&input, &preview, controller(0.000_001));

        input.dispatch_event(&Event::new("change").unwrap()).unwrap();

        assert_eq!(input.value(), "");
        assert_eq!(preview.inner_html(), "");

        let document = dom::document().unwrap();
        let last_toast = dom::query_all(&document, ".toast-container .toast")
            .unwrap()
            .pop()
            .expect("toast de erro");
        let html = last_toast.inner_html();
        assert!(html.contains("bg-danger"));
        assert!(html.contains("Arquivo muito grande"));
    }

    #[wasm_bindgen_test::wasm_bindgen_test]
    fn wasm_valid_file_renders_preview() {
        let input = file_input("notas.md");
        let preview = preview_area();
        setup_file_preview(&input, &preview, controller(50.0));

        input.dispatch_event(&Event::new("change").unwrap()).unwrap();

        let html = preview.inner_html();
        assert!(html.contains("<strong>notas.md</strong>"));
        assert!(html.contains("Tamanho: 0.00 MB | Tipo: MD"));
    }
}
