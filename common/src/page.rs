//! Inicialização da página: widgets, confirmação e fade-in dos cards

pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
pub const POPOVER_SELECTOR: &str = r#"[data-bs-toggle="popover"]"#;
pub const MODAL_SELECTOR: &str = ".modal";
pub const MODAL_SHOWN_EVENT: &str = "shown.bs.modal";
/// Primeiro campo focável de um modal
pub const MODAL_FOCUS_SELECTOR: &str = "input, textarea, select";
pub const CONFIRM_ATTRIBUTE: &str = "data-confirm";
pub const CONFIRM_SELECTOR: &str = "[data-confirm]";
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Tem certeza que deseja continuar?";
pub const CARD_SELECTOR: &str = ".card";
pub const FADE_IN_CLASS: &str = "fade-in";

/// Widgets do Bootstrap criados na carga da página
pub trait WidgetFactory {
    type Element;

    fn make_tooltip(&self, element: &Self::Element);
    fn make_popover(&self, element: &Self::Element);
}

/// Quantidade de widgets ligados
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetCounts {
    pub tooltips: usize,
    pub popovers: usize,
}

pub fn attach_widgets<W: WidgetFactory>(
    factory: &W,
    tooltips: &[W::Element],
    popovers: &[W::Element],
) -> WidgetCounts {
    tooltips.iter().for_each(|el| factory.make_tooltip(el));
    popovers.iter().for_each(|el| factory.make_popover(el));
    WidgetCounts { tooltips: tooltips.len(), popovers: popovers.len() }
}

/// Texto do prompt; atributo vazio usa a mensagem padrão
pub fn confirm_message(attribute: Option<&str>) -> &str {
    match attribute {
        Some(message) if !message.is_empty() => message,
        _ => DEFAULT_CONFIRM_MESSAGE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDecision {
    Proceed,
    /// Cancelar a ação padrão (navegação, envio do form)
    Cancel,
}

impl ConfirmDecision {
    pub fn from_answer(accepted: bool) -> Self {
        if accepted {
            ConfirmDecision::Proceed
        } else {
            ConfirmDecision::Cancel
        }
    }
}

/// Opções do `IntersectionObserver` dos cards
#[derive(Debug, Clone, PartialEq)]
pub struct FadeInOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for FadeInOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
        }
    }
}

/// Alvo observado para o fade-in
pub trait RevealTarget {
    type Element;

    fn add_class(&self, element: &Self::Element, class: &str);
    fn unobserve(&self, element: &Self::Element);
}

/// Trata um lote de entradas do observer
///
/// Cada elemento visível recebe `fade-in` e deixa de ser observado, então
/// dispara uma única vez.
pub fn reveal_intersecting<R, I>(target: &R, entries: I) -> usize
where
    R: RevealTarget,
    I: IntoIterator<Item = (R::Element, bool)>,
{
    let mut revealed = 0;
    for (element, is_intersecting) in entries {
        if is_intersecting {
            target.add_class(&element, FADE_IN_CLASS);
            target.unobserve(&element);
            revealed += 1;
        }
    }
    revealed
}
