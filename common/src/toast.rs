//! Notificações toast
//!
//! `Toaster` é o controlador da interface: guarda o contêiner (criado uma
//! única vez) e gera ids. O DOM real fica atrás de `ToastHost`.

use crate::error::Result;
use crate::html::escape_html;
use serde::Serialize;
use std::cell::{Cell, RefCell};

pub const CONTAINER_SELECTOR: &str = ".toast-container";
pub const CONTAINER_CLASS: &str = "toast-container position-fixed top-0 end-0 p-3";
pub const CONTAINER_Z_INDEX: &str = "1055";
/// Evento disparado pelo Bootstrap ao terminar a transição de saída
pub const HIDDEN_EVENT: &str = "hidden.bs.toast";

/// Categoria visual do toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Valores desconhecidos caem em `Info`
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn bg_class(&self) -> &'static str {
        match self {
            Severity::Success => "bg-success",
            Severity::Error => "bg-danger",
            Severity::Warning => "bg-warning",
            Severity::Info => "bg-info",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Severity::Success => "bi-check-circle-fill",
            Severity::Error => "bi-exclamation-triangle-fill",
            Severity::Warning => "bi-exclamation-circle-fill",
            Severity::Info => "bi-info-circle-fill",
        }
    }
}

/// Opções repassadas ao widget `bootstrap.Toast`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToastOptions {
    pub autohide: bool,
    pub delay: u32,
}

/// Um toast pronto para ser montado
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn to_html(&self, title: &str) -> String {
        format!(
            concat!(
                r#"<div class="toast" id="{id}" role="alert" aria-live="assertive" aria-atomic="true">"#,
                r#"<div class="toast-header {bg} text-white">"#,
                r#"<i class="bi {icon} me-2"></i>"#,
                r#"<strong class="me-auto">{title}</strong>"#,
                r#"<button type="button" class="btn-close btn-close-white" data-bs-dismiss="toast"></button>"#,
                r#"</div>"#,
                r#"<div class="toast-body">{message}</div>"#,
                r#"</div>"#,
            ),
            id = self.id,
            bg = self.severity.bg_class(),
            icon = self.severity.icon_class(),
            title = escape_html(title),
            message = escape_html(&self.message),
        )
    }
}

/// Acesso ao DOM necessário para exibir toasts
pub trait ToastHost {
    type Container: Clone;

    fn find_container(&self) -> Option<Self::Container>;
    fn create_container(&self) -> Result<Self::Container>;

    /// Insere o toast no fim do contêiner, cria o widget com `options`,
    /// agenda a remoção do elemento em `HIDDEN_EVENT` e exibe.
    fn mount_toast(
        &self,
        container: &Self::Container,
        toast: &Toast,
        html: &str,
        options: ToastOptions,
    ) -> Result<()>;
}

pub struct Toaster<H: ToastHost> {
    host: H,
    title: String,
    delay_ms: u32,
    container: RefCell<Option<H::Container>>,
    sequence: Cell<u64>,
}

impl<H: ToastHost> Toaster<H> {
    pub fn new(host: H, title: impl Into<String>, delay_ms: u32) -> Self {
        Self {
            host,
            title: title.into(),
            delay_ms,
            container: RefCell::new(None),
            sequence: Cell::new(0),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exibe um toast e devolve seu id
    ///
    /// # Arguments
    /// * `now_ms` - relógio em milissegundos, usado no id
    pub fn show(&self, message: &str, severity: Severity, now_ms: u64) -> Result<String> {
        let container = self.container()?;

        let seq = self.sequence.get() + 1;
        self.sequence.set(seq);

        let toast = Toast {
            id: format!("toast-{}-{}", now_ms, seq),
            message: message.to_string(),
            severity,
        };
        let options = ToastOptions { autohide: true, delay: self.delay_ms };

        self.host.mount_toast(&container, &toast, &toast.to_html(&self.title), options)?;
        log::debug!("toast {} exibido ({})", toast.id, severity.as_str());
        Ok(toast.id)
    }

    fn container(&self) -> Result<H::Container> {
        if let Some(container) = self.container.borrow().as_ref() {
            return Ok(container.clone());
        }

        let container = match self.host.find_container() {
            Some(existing) => existing,
            None => self.host.create_container()?,
        };
        *self.container.borrow_mut() = Some(container.clone());
        Ok(container)
    }
}
