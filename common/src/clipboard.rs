//! Cópia para a área de transferência: escolha de estratégia e mensagens

use crate::toast::Severity;

pub const COPIED_MESSAGE: &str = "Texto copiado!";
pub const COPY_FAILED_MESSAGE: &str = "Erro ao copiar texto";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStrategy {
    /// `navigator.clipboard.writeText`
    AsyncApi,
    /// `<textarea>` fora da tela + `execCommand("copy")`
    LegacyCommand,
}

impl CopyStrategy {
    /// A API assíncrona só vale em contexto seguro
    pub fn select(has_clipboard_api: bool, is_secure_context: bool) -> Self {
        if has_clipboard_api && is_secure_context {
            CopyStrategy::AsyncApi
        } else {
            CopyStrategy::LegacyCommand
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn from_command(result: Result<bool, ()>) -> Self {
        match result {
            Ok(true) => CopyOutcome::Copied,
            _ => CopyOutcome::Failed,
        }
    }

    /// Toast correspondente ao resultado
    pub fn toast(&self) -> (&'static str, Severity) {
        match self {
            CopyOutcome::Copied => (COPIED_MESSAGE, Severity::Success),
            CopyOutcome::Failed => (COPY_FAILED_MESSAGE, Severity::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_requires_secure_context() {
        assert_eq!(CopyStrategy::select(true, true), CopyStrategy::AsyncApi);
        assert_eq!(CopyStrategy::select(true, false), CopyStrategy::LegacyCommand);
        assert_eq!(CopyStrategy::select(false, true), CopyStrategy::LegacyCommand);
    }

    #[test]
    fn test_outcome_from_command() {
        assert_eq!(CopyOutcome::from_command(Ok(true)), CopyOutcome::Copied);
        assert_eq!(CopyOutcome::from_command(Ok(false)), CopyOutcome::Failed);
        assert_eq!(CopyOutcome::from_command(Err(())), CopyOutcome::Failed);
    }

    #[test]
    fn test_outcome_toast() {
        assert_eq!(CopyOutcome::Copied.toast(), ("Texto copiado!", Severity::Success));
        assert_eq!(CopyOutcome::Failed.toast(), ("Erro ao copiar texto", Severity::Error));
    }
}
