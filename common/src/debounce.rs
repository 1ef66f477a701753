//! Debounce genérico
//!
//! Cada chamada cancela a execução pendente e agenda uma nova; só a última
//! chamada dentro da janela executa. O relógio vem de um `Scheduler`.

use std::cell::RefCell;
use std::rc::Rc;

/// Agendador de tarefas adiadas (timers do navegador, relógio virtual nos testes)
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancelar um handle que já disparou não tem efeito
    fn cancel(&self, handle: Self::Handle);
}

pub struct Debounced<A, S: Scheduler> {
    func: Rc<dyn Fn(A)>,
    wait_ms: u32,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
}

impl<A: 'static, S: Scheduler> Debounced<A, S> {
    pub fn new(func: impl Fn(A) + 'static, wait_ms: u32, scheduler: S) -> Self {
        Self {
            func: Rc::new(func),
            wait_ms,
            scheduler,
            pending: RefCell::new(None),
        }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    pub fn call(&self, args: A) {
        if let Some(previous) = self.pending.borrow_mut().take() {
            self.scheduler.cancel(previous);
            log::trace!("debounce: execução pendente cancelada");
        }

        let func = Rc::clone(&self.func);
        let handle = self
            .scheduler
            .schedule(self.wait_ms, Box::new(move || func(args)));
        *self.pending.borrow_mut() = Some(handle);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Task {
        id: usize,
        due: u64,
        run: Box<dyn FnOnce()>,
    }

    /// Relógio virtual: tarefas só rodam em `advance_to`
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        now: Rc<Cell<u64>>,
        next_id: Rc<Cell<usize>>,
        tasks: Rc<RefCell<Vec<Task>>>,
    }

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.now.get()
        }

        pub fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }

        pub fn advance_to(&self, t: u64) {
            loop {
                let next = {
                    let mut tasks = self.tasks.borrow_mut();
                    let idx = tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= t)
                        .min_by_key(|(_, task)| (task.due, task.id))
                        .map(|(i, _)| i);
                    idx.map(|i| tasks.remove(i))
                };
                match next {
                    Some(task) => {
                        self.now.set(task.due);
                        (task.run)();
                    }
                    None => break,
                }
            }
            self.now.set(t);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = usize;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> usize {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.tasks.borrow_mut().push(Task {
                id,
                due: self.now.get() + u64::from(delay_ms),
                run: task,
            });
            id
        }

        fn cancel(&self, handle: usize) {
            self.tasks.borrow_mut().retain(|task| task.id != handle);
        }
    }
}
