//! Toaster com um host em memória
//!
//! Simula o contêiner e o evento `hidden.bs.toast` sem navegador.

use estudos_common::toast::{Toast, ToastHost, ToastOptions, Toaster};
use estudos_common::{Result, Severity};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Dom {
    containers_created: usize,
    /// (id, html, options) de cada toast ainda no documento
    toasts: Vec<(String, String, ToastOptions)>,
}

#[derive(Clone, Default)]
struct MemoryHost {
    dom: Rc<RefCell<Dom>>,
    preexisting: bool,
}

impl MemoryHost {
    /// Equivalente ao fim da transição de saída
    fn fire_hidden(&self, id: &str) {
        self.dom.borrow_mut().toasts.retain(|(toast_id, _, _)| toast_id != id);
    }
}

impl ToastHost for MemoryHost {
    type Container = u32;

    fn find_container(&self) -> Option<u32> {
        let dom = self.dom.borrow();
        (self.preexisting || dom.containers_created > 0).then_some(1)
    }

    fn create_container(&self) -> Result<u32> {
        self.dom.borrow_mut().containers_created += 1;
        Ok(1)
    }

    fn mount_toast(&self, _: &u32, toast: &Toast, html: &str, options: ToastOptions) -> Result<()> {
        self.dom
            .borrow_mut()
            .toasts
            .push((toast.id.clone(), html.to_string(), options));
        Ok(())
    }
}

/// Um toast entra no contêiner e sai após o evento de ocultação
#[test]
fn test_toast_round_trip() {
    let host = MemoryHost::default();
    let toaster = Toaster::new(host.clone(), "Assistente de Estudos", 5000);

    let id = toaster.show("msg", Severity::Success, 1_700_000_000_000).expect("toast");

    {
        let dom = host.dom.borrow();
        assert_eq!(dom.containers_created, 1);
        assert_eq!(dom.toasts.len(), 1);
        let (toast_id, html, options) = &dom.toasts[0];
        assert_eq!(toast_id, &id);
        assert!(html.contains("bg-success"));
        assert_eq!(*options, ToastOptions { autohide: true, delay: 5000 });
    }

    host.fire_hidden(&id);
    assert!(host.dom.borrow().toasts.is_empty());
}

/// O contêiner é criado uma vez só
#[test]
fn test_container_created_once() {
    let host = MemoryHost::default();
    let toaster = Toaster::new(host.clone(), "Assistente de Estudos", 5000);

    toaster.show("um", Severity::Info, 10).unwrap();
    toaster.show("dois", Severity::Warning, 10).unwrap();
    toaster.show("três", Severity::Error, 11).unwrap();

    let dom = host.dom.borrow();
    assert_eq!(dom.containers_created, 1);
    assert_eq!(dom.toasts.len(), 3);
}

/// Um contêiner já presente na página é reaproveitado
#[test]
fn test_existing_container_reused() {
    let host = MemoryHost { preexisting: true, ..Default::default() };
    let toaster = Toaster::new(host.clone(), "Assistente de Estudos", 5000);

    toaster.show("oi", Severity::Info, 1).unwrap();
    assert_eq!(host.dom.borrow().containers_created, 0);
}

/// Ids distintos mesmo no mesmo milissegundo
#[test]
fn test_ids_unique_within_same_millisecond() {
    let toaster = Toaster::new(MemoryHost::default(), "Assistente de Estudos", 5000);

    let a = toaster.show("a", Severity::Info, 42).unwrap();
    let b = toaster.show("b", Severity::Info, 42).unwrap();

    assert_ne!(a, b);
    assert!(a.starts_with("toast-42-"));
}

/// Severidade desconhecida cai em info
#[test]
fn test_unknown_severity_renders_info() {
    let host = MemoryHost::default();
    let toaster = Toaster::new(host.clone(), "Assistente de Estudos", 5000);

    toaster.show("?", Severity::parse("critical"), 1).unwrap();
    let dom = host.dom.borrow();
    assert!(dom.toasts[0].1.contains("bg-info"));
    assert!(dom.toasts[0].1.contains("bi-info-circle-fill"));
}
