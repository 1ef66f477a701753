//! `Scheduler` sobre `setTimeout` (gloo)

use estudos_common::Scheduler;
use gloo::timers::callback::Timeout;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        // soltar o Timeout chama clearTimeout
        drop(handle);
    }
}
