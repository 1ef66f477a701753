//! Validação e preview de arquivos antes do upload

use crate::config::UiConfig;
use crate::html::escape_html;
use serde::Deserialize;
use thiserror::Error;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Dados mínimos de um arquivo selecionado
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }
}

/// Limites de upload
#[derive(Debug, Clone, PartialEq)]
pub struct FileRules {
    pub max_size_mb: f64,
    pub allowed_types: Vec<String>,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

impl From<&UiConfig> for FileRules {
    fn from(config: &UiConfig) -> Self {
        Self {
            max_size_mb: config.max_upload_mb,
            allowed_types: config.allowed_extensions.clone(),
        }
    }
}

/// Motivo de rejeição de um arquivo
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    #[error("Arquivo muito grande. Tamanho máximo: {max_mb}MB")]
    TooLarge { max_mb: f64 },

    #[error("Tipo de arquivo não permitido. Use: {}", .allowed.join(", "))]
    UnsupportedType { allowed: Vec<String> },
}

/// Valida tamanho e extensão
///
/// O tamanho é verificado primeiro; a extensão é comparada sem diferenciar
/// maiúsculas de minúsculas.
pub fn validate_file(file: &FileInfo, rules: &FileRules) -> Result<(), FileError> {
    if file.size as f64 > rules.max_size_mb * BYTES_PER_MB {
        return Err(FileError::TooLarge { max_mb: rules.max_size_mb });
    }

    let name = file.name.to_lowercase();
    let allowed = rules
        .allowed_types
        .iter()
        .any(|ext| name.ends_with(&ext.to_lowercase()));
    if !allowed {
        return Err(FileError::UnsupportedType { allowed: rules.allowed_types.clone() });
    }

    Ok(())
}

/// Resumo exibido na área de preview
#[derive(Debug, Clone, PartialEq)]
pub struct FilePreview {
    pub name: String,
    /// Tamanho em MB com duas casas
    pub size_mb: String,
    pub extension: String,
}

impl From<&FileInfo> for FilePreview {
    fn from(file: &FileInfo) -> Self {
        let extension = file.name.rsplit('.').next().unwrap_or_default().to_uppercase();
        Self {
            name: file.name.clone(),
            size_mb: format!("{:.2}", file.size as f64 / BYTES_PER_MB),
            extension,
        }
    }
}

impl FilePreview {
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="alert alert-info"><i class="bi bi-file-earmark-text me-2"></i><strong>{}</strong><br><small>Tamanho: {} MB | Tipo: {}</small></div>"#,
            escape_html(&self.name),
            self.size_mb,
            escape_html(&self.extension),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_only() -> FileRules {
        FileRules { max_size_mb: 50.0, allowed_types: vec![".pdf".into()] }
    }

    #[test]
    fn test_validate_file_ok() {
        let file = FileInfo::new("resumo.pdf", 1024);
        assert_eq!(validate_file(&file, &FileRules::default()), Ok(()));
    }

    #[test]
    fn test_validate_file_unsupported_type() {
        let file = FileInfo::new("x.exe", 100);
        let err = validate_file(&file, &pdf_only()).unwrap_err();
        assert!(matches!(err, FileError::UnsupportedType { .. }));
        assert_eq!(err.to_string(), "Tipo de arquivo não permitido. Use: .pdf");
    }

    #[test]
    fn test_validate_file_extension_case_insensitive() {
        let file = FileInfo::new("NOTAS.PDF", 100);
        assert_eq!(validate_file(&file, &pdf_only()), Ok(()));
    }

    #[test]
    fn test_validate_file_too_large() {
        let file = FileInfo::new("livro.pdf", 50 * 1024 * 1024 + 1);
        let err = validate_file(&file, &pdf_only()).unwrap_err();
        assert_eq!(err, FileError::TooLarge { max_mb: 50.0 });
        assert_eq!(err.to_string(), "Arquivo muito grande. Tamanho máximo: 50MB");
    }

    #[test]
    fn test_validate_file_exact_limit_is_ok() {
        let file = FileInfo::new("livro.pdf", 50 * 1024 * 1024);
        assert_eq!(validate_file(&file, &pdf_only()), Ok(()));
    }

    #[test]
    fn test_size_checked_before_type() {
        let file = FileInfo::new("video.mp4", 2 * 1024 * 1024);
        let rules = FileRules { max_size_mb: 1.0, allowed_types: vec![".pdf".into()] };
        assert!(matches!(validate_file(&file, &rules), Err(FileError::TooLarge { .. })));
    }

    #[test]
    fn test_default_rules_message_lists_all_types() {
        let err = validate_file(&FileInfo::new("a.png", 1), &FileRules::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Tipo de arquivo não permitido. Use: .pdf, .txt, .doc, .docx, .md"
        );
    }

    #[test]
    fn test_preview_summary() {
        let preview = FilePreview::from(&FileInfo::new("aula.final.docx", 1_572_864));
        assert_eq!(preview.size_mb, "1.50");
        assert_eq!(preview.extension, "DOCX");

        let html = preview.to_html();
        assert!(html.contains("<strong>aula.final.docx</strong>"));
        assert!(html.contains("Tamanho: 1.50 MB | Tipo: DOCX"));
    }

    #[test]
    fn test_preview_escapes_name() {
        let preview = FilePreview::from(&FileInfo::new("<img>.md", 10));
        assert!(preview.to_html().contains("&lt;img&gt;.md"));
    }
}
