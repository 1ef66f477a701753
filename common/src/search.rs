//! Busca em tempo real

use crate::debounce::{Debounced, Scheduler};

/// Filtra a consulta digitada
///
/// Devolve a consulta sem espaços nas pontas quando ela está vazia (campo
/// limpo) ou tem pelo menos `min_len` caracteres; consultas de um caractere
/// são descartadas.
pub fn normalize_query(raw: &str, min_len: usize) -> Option<&str> {
    let query = raw.trim();
    let len = query.chars().count();
    if len == 0 || len >= min_len {
        Some(query)
    } else {
        None
    }
}

pub struct LiveSearch<S: Scheduler> {
    debounced: Debounced<String, S>,
    min_len: usize,
}

impl<S: Scheduler> LiveSearch<S> {
    pub fn new(
        callback: impl Fn(String) + 'static,
        delay_ms: u32,
        min_len: usize,
        scheduler: S,
    ) -> Self {
        Self {
            debounced: Debounced::new(callback, delay_ms, scheduler),
            min_len,
        }
    }

    /// Tratador do evento `input`
    pub fn on_input(&self, raw: &str) {
        if let Some(query) = normalize_query(raw, self.min_len) {
            self.debounced.call(query.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::testing::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  ", 2), Some(""));
        assert_eq!(normalize_query("a", 2), None);
        assert_eq!(normalize_query(" a ", 2), None);
        assert_eq!(normalize_query(" ab ", 2), Some("ab"));
        assert_eq!(normalize_query("ç", 2), None);
        assert_eq!(normalize_query("çã", 2), Some("çã"));
    }

    #[test]
    fn test_live_search_debounces_and_filters() {
        let clock = ManualScheduler::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let search = LiveSearch::new(move |q| sink.borrow_mut().push(q), 300, 2, clock.clone());

        search.on_input("m");
        clock.advance_to(400);
        assert!(seen.borrow().is_empty());

        search.on_input("ma");
        clock.advance_to(450);
        search.on_input("mat ");
        clock.advance_to(2000);
        assert_eq!(*seen.borrow(), vec!["mat".to_string()]);

        search.on_input("");
        clock.advance_to(3000);
        assert_eq!(seen.borrow().last().map(String::as_str), Some(""));
    }

    #[test]
    fn test_single_char_does_not_cancel_pending() {
        let clock = ManualScheduler::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let search = LiveSearch::new(move |q| sink.borrow_mut().push(q), 300, 2, clock.clone());

        search.on_input("fisica");
        clock.advance_to(100);
        search.on_input("f");
        clock.advance_to(1000);
        assert_eq!(*seen.borrow(), vec!["fisica".to_string()]);
    }
}
