//! Toasts no DOM real

use crate::bootstrap::BsToast;
use crate::dom;
use estudos_common::toast::{
    Toast, ToastHost, ToastOptions, CONTAINER_CLASS, CONTAINER_SELECTOR, CONTAINER_Z_INDEX,
    HIDDEN_EVENT,
};
use estudos_common::{Error, Result};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub struct DomToastHost {
    document: Document,
}

impl DomToastHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ToastHost for DomToastHost {
    type Container = Element;

    fn find_container(&self) -> Option<Element> {
        self.document.query_selector(CONTAINER_SELECTOR).ok().flatten()
    }

    fn create_container(&self) -> Result<Element> {
        let container: HtmlElement = self
            .document
            .create_element("div")
            .map_err(dom::from_js)?
            .dyn_into()
            .map_err(|_| Error::Dom("div não é HtmlElement".into()))?;
        container.set_class_name(CONTAINER_CLASS);
        container
            .style()
            .set_property("z-index", CONTAINER_Z_INDEX)
            .map_err(dom::from_js)?;

        dom::body(&self.document)
            .map_err(dom::from_js)?
            .append_child(&container)
            .map_err(dom::from_js)?;
        Ok(container.into())
    }

    fn mount_toast(
        &self,
        container: &Element,
        toast: &Toast,
        html: &str,
        options: ToastOptions,
    ) -> Result<()> {
        container
            .insert_adjacent_html("beforeend", html)
            .map_err(dom::from_js)?;

        let element = self
            .document
            .get_element_by_id(&toast.id)
            .ok_or_else(|| Error::Dom(format!("toast {} não encontrado", toast.id)))?;

        let widget = serde_wasm_bindgen::to_value(&options)
            .map_err(|e| Error::Dom(e.to_string()))
            .and_then(|options| BsToast::new(&element, &options).map_err(dom::from_js));
        let widget = match widget {
            Ok(widget) => widget,
            Err(e) => {
                // sem widget o elemento nunca receberia o evento de saída
                element.remove();
                return Err(e);
            }
        };

        // remove o elemento ao fim da transição de saída
        let target = element.clone();
        EventListener::once(&element, HIDDEN_EVENT, move |_| target.remove()).forget();

        widget.show();
        Ok(())
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_container_created_and_found() {
        let document = dom::document().expect("document");
        let host = DomToastHost::new(document.clone());

        if let Some(old) = host.find_container() {
            old.remove();
        }
        let created = host.create_container().expect("contêiner");

        assert_eq!(created.class_name(), CONTAINER_CLASS);
        assert!(host.find_container().is_some());
        assert_eq!(document.query_selector_all(CONTAINER_SELECTOR).unwrap().length(), 1);
    }

    #[wasm_bindgen_test]
    fn wasm_failed_widget_leaves_no_orphan() {
        dom::testing::install_bootstrap("throw new Error('bootstrap indisponível');");
        let document = dom::document().unwrap();
        let host = DomToastHost::new(document);
        let container = host.create_container().unwrap();

        let toast = Toast {
            id: "toast-orfao-1".into(),
            message: "oi".into(),
            severity: estudos_common::Severity::Info,
        };
        let result = host.mount_toast(
            &container,
            &toast,
            &toast.to_html("Assistente de Estudos"),
            ToastOptions { autohide: true, delay: 5000 },
        );

        assert!(result.is_err());
        assert_eq!(container.child_element_count(), 0);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_toast_removed_on_hidden_event() {
        dom::testing::install_bootstrap("");
        let document = dom::document().unwrap();
        let host = DomToastHost::new(document.clone());
        let container = host.create_container().unwrap();

        let toast = Toast {
            id: "toast-ciclo-1".into(),
            message: "salvo".into(),
            severity: estudos_common::Severity::Success,
        };
        host.mount_toast(
            &container,
            &toast,
            &toast.to_html("Assistente de Estudos"),
            ToastOptions { autohide: true, delay: 5000 },
        )
        .unwrap();

        let element = document.get_element_by_id("toast-ciclo-1").expect("toast montado");
        assert_eq!(container.child_element_count(), 1);

        element
            .dispatch_event(&web_sys::Event::new(HIDDEN_EVENT).unwrap())
            .unwrap();
        assert!(document.get_element_by_id("toast-ciclo-1").is_none());
        container.remove();
    }
}
