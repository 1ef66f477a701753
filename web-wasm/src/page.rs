//! Inicializador da página
//!
//! Liga tooltips/popovers, foco automático nos modais, confirmação de ações
//! destrutivas e o fade-in dos cards.

use crate::bootstrap::BootstrapWidgets;
use crate::dom;
use estudos_common::page::{
    attach_widgets, confirm_message, reveal_intersecting, CARD_SELECTOR, CONFIRM_ATTRIBUTE,
    CONFIRM_SELECTOR, MODAL_FOCUS_SELECTOR, MODAL_SELECTOR, MODAL_SHOWN_EVENT, POPOVER_SELECTOR,
    TOOLTIP_SELECTOR,
};
use estudos_common::{ConfirmDecision, FadeInOptions, RevealTarget};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Roda `init` agora ou no `DOMContentLoaded`, conforme o estado do documento
pub fn init_when_ready(document: &Document) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        return init(document);
    }

    let doc = document.clone();
    EventListener::once(document, "DOMContentLoaded", move |_| {
        if let Err(e) = init(&doc) {
            log::error!("falha ao inicializar a página: {:?}", e);
        }
    })
    .forget();
    Ok(())
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let counts = attach_widgets(
        &BootstrapWidgets,
        &dom::query_all(document, TOOLTIP_SELECTOR)?,
        &dom::query_all(document, POPOVER_SELECTOR)?,
    );
    log::debug!("{} tooltips, {} popovers", counts.tooltips, counts.popovers);

    for modal in dom::query_all(document, MODAL_SELECTOR)? {
        bind_modal_focus(&modal);
    }

    for element in dom::query_all(document, CONFIRM_SELECTOR)? {
        bind_confirm(&element);
    }

    observe_cards(document)
}

fn bind_modal_focus(modal: &Element) {
    let target = modal.clone();
    EventListener::new(modal, MODAL_SHOWN_EVENT, move |_| focus_first_field(&target)).forget();
}

fn focus_first_field(modal: &Element) {
    if let Ok(Some(field)) = modal.query_selector(MODAL_FOCUS_SELECTOR) {
        if let Some(field) = field.dyn_ref::<HtmlElement>() {
            if let Err(e) = field.focus() {
                log::warn!("foco no modal falhou: {:?}", e);
            }
        }
    }
}

fn bind_confirm(element: &Element) {
    let target = element.clone();
    EventListener::new_with_options(
        element,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let attribute = target.get_attribute(CONFIRM_ATTRIBUTE);
            let message = confirm_message(attribute.as_deref());
            let accepted = dom::window()
                .and_then(|w| w.confirm_with_message(message))
                .unwrap_or(false);

            if ConfirmDecision::from_answer(accepted) == ConfirmDecision::Cancel {
                event.prevent_default();
            }
        },
    )
    .forget();
}

struct CardObserver<'a>(&'a IntersectionObserver);

impl RevealTarget for CardObserver<'_> {
    type Element = Element;

    fn add_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().add_1(class) {
            log::warn!("classe {} não aplicada: {:?}", class, e);
        }
    }

    fn unobserve(&self, element: &Element) {
        self.0.unobserve(element);
    }
}

fn observe_cards(document: &Document) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target(), entry.is_intersecting()));
            reveal_intersecting(&CardObserver(&observer), entries);
        },
    );

    let options = FadeInOptions::default();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    let cards = dom::query_all(document, CARD_SELECTOR)?;
    for card in &cards {
        observer.observe(card);
    }
    log::debug!("{} cards observados", cards.len());
    Ok(())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_card_observer_adds_class_once() {
        let document = dom::document().unwrap();
        let card = document.create_element("div").unwrap();
        card.set_class_name("card");

        let callback = Closure::<dyn FnMut()>::new(|| {});
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).unwrap();
        observer.observe(&card);

        let revealed = reveal_intersecting(&CardObserver(&observer), vec![(card.clone(), true)]);

        assert_eq!(revealed, 1);
        assert!(card.class_list().contains("fade-in"));
    }

    fn confirm_button(message: &str) -> Element {
        let document = dom::document().unwrap();
        let button = document.create_element("a").unwrap();
        button.set_attribute(CONFIRM_ATTRIBUTE, message).unwrap();
        dom::body(&document).unwrap().append_child(&button).unwrap();
        bind_confirm(&button);
        button
    }

    fn cancelable_click() -> Event {
        let init = EventInit::new();
        init.set_cancelable(true);
        Event::new_with_event_init_dict("click", &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn wasm_declined_confirm_prevents_default() {
        dom::testing::stub_confirm(false);
        let button = confirm_button("Excluir disciplina?");

        let click = cancelable_click();
        button.dispatch_event(&click).unwrap();

        assert!(click.default_prevented());
        assert_eq!(dom::testing::last_confirm_message().as_deref(), Some("Excluir disciplina?"));
        button.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_accepted_confirm_keeps_default() {
        dom::testing::stub_confirm(true);
        let button = confirm_button("");

        let click = cancelable_click();
        button.dispatch_event(&click).unwrap();

        assert!(!click.default_prevented());
        assert_eq!(
            dom::testing::last_confirm_message().as_deref(),
            Some("Tem certeza que deseja continuar?")
        );
        button.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_shown_modal_focuses_first_field() {
        let document = dom::document().unwrap();
        let modal = document.create_element("div").unwrap();
        modal.set_class_name("modal");
        modal
            .set_inner_html(r#"<p>Nova tarefa</p><textarea id="modal-primeiro"></textarea><input>"#);
        dom::body(&document).unwrap().append_child(&modal).unwrap();
        bind_modal_focus(&modal);

        modal.dispatch_event(&Event::new(MODAL_SHOWN_EVENT).unwrap()).unwrap();

        let first = document.get_element_by_id("modal-primeiro").unwrap();
        let active = document.active_element().expect("elemento focado");
        assert_eq!(JsValue::from(active), JsValue::from(first));
        modal.remove();
    }
}
