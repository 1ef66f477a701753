//! Assistente de Estudos - biblioteca comum
//!
//! Lógica da interface compartilhada entre o frontend WASM e os testes nativos.
//! Nada aqui toca o DOM: o navegador entra pelas traits de capacidade
//! (`WidgetFactory`, `ToastHost`, `Scheduler`, `RevealTarget`).

pub mod ajax;
pub mod clipboard;
pub mod config;
pub mod datetime;
pub mod debounce;
pub mod error;
pub mod html;
pub mod page;
pub mod search;
pub mod toast;
pub mod validation;

pub use ajax::{Method, PreparedRequest, RequestOptions};
pub use clipboard::{CopyOutcome, CopyStrategy};
pub use config::UiConfig;
pub use datetime::{format_date, parse_instant, time_ago, time_ago_between};
pub use debounce::{Debounced, Scheduler};
pub use error::{Error, Result};
pub use page::{ConfirmDecision, FadeInOptions, RevealTarget, WidgetFactory};
pub use search::{LiveSearch, normalize_query};
pub use toast::{Severity, Toast, ToastHost, ToastOptions, Toaster};
pub use validation::{FileError, FileInfo, FilePreview, FileRules, validate_file};
