//! Preparação de requisições AJAX
//!
//! Monta método, cabeçalhos e corpo finais; o envio (fetch) fica no frontend.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Seletor do campo oculto com o token CSRF
pub const CSRF_FIELD_SELECTOR: &str = "[name=csrfmiddlewaretoken]";
pub const CSRF_HEADER: &str = "X-CSRFToken";

const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("X-Requested-With", "XMLHttpRequest"),
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Other(String),
}

impl Method {
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Other(m) => m,
        }
    }

    /// POST/PUT/DELETE exigem o token CSRF
    pub fn requires_csrf(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Delete)
    }
}

/// Opções informadas pelo chamador (todas opcionais)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub method: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

/// Requisição final, pronta para o fetch
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl RequestOptions {
    /// Mescla as opções sobre os padrões e injeta o CSRF quando aplicável
    ///
    /// # Arguments
    /// * `csrf_token` - valor do campo oculto, se existir na página
    pub fn prepare(self, csrf_token: Option<&str>) -> PreparedRequest {
        let method = self.method.as_deref().map(Method::parse).unwrap_or_default();

        let mut headers: Vec<(String, String)> = DEFAULT_HEADERS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (key, value) in self.headers {
            set_header(&mut headers, key, value);
        }

        if method.requires_csrf() {
            if let Some(token) = csrf_token {
                set_header(&mut headers, CSRF_HEADER.to_string(), token.to_string());
            }
        }

        PreparedRequest { method, headers, body: self.body }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, key: String, value: String) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
        Some(existing) => existing.1 = value,
        None => headers.push((key, value)),
    }
}

/// Status fora de 2xx vira `Error::Http`
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::Http(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(method: &str) -> RequestOptions {
        RequestOptions { method: Some(method.into()), ..Default::default() }
    }

    #[test]
    fn test_defaults() {
        let req = RequestOptions::default().prepare(Some("abc"));
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.header("X-Requested-With"), Some("XMLHttpRequest"));
        assert_eq!(req.header(CSRF_HEADER), None);
        assert_eq!(req.body, None);
    }

    #[test]
    fn test_post_with_token() {
        let req = options("POST").prepare(Some("abc"));
        assert_eq!(req.header("X-CSRFToken"), Some("abc"));
    }

    #[test]
    fn test_post_without_token_field() {
        let req = options("POST").prepare(None);
        assert_eq!(req.header(CSRF_HEADER), None);
        assert_eq!(req.headers.len(), 2);
    }

    #[test]
    fn test_put_and_delete_get_token() {
        assert_eq!(options("PUT").prepare(Some("t")).header(CSRF_HEADER), Some("t"));
        assert_eq!(options("delete").prepare(Some("t")).header(CSRF_HEADER), Some("t"));
        assert_eq!(options("PATCH").prepare(Some("t")).header(CSRF_HEADER), None);
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let mut opts = options("POST");
        opts.headers.insert("content-type".into(), "text/plain".into());
        opts.headers.insert("Accept".into(), "application/json".into());
        let req = opts.prepare(None);

        assert_eq!(req.header("Content-Type"), Some("text/plain"));
        assert_eq!(req.header("X-Requested-With"), Some("XMLHttpRequest"));
        assert_eq!(req.header("Accept"), Some("application/json"));
        assert_eq!(req.headers.len(), 3);
    }

    #[test]
    fn test_deserialize_options() {
        let opts: RequestOptions =
            serde_json::from_str(r#"{"method":"POST","body":"{\"a\":1}"}"#).unwrap();
        assert_eq!(opts.method.as_deref(), Some("POST"));
        assert!(opts.headers.is_empty());
        assert_eq!(opts.body.as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        let err = check_status(500).unwrap_err();
        assert!(err.to_string().contains("500"));
        assert!(matches!(check_status(404), Err(Error::Http(404))));
    }
}
