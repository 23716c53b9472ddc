//! Primary-context dispatch.
//!
//! Engine control primitives must run on the primary (UI) execution context.
//! [`MainExecutor`] is the injected capability the core uses to get there:
//! a non-blocking redispatch, never a synchronous block, so callback threads
//! are never parked waiting for the main loop.

/// A task to run on the primary execution context.
pub type MainTask = Box<dyn FnOnce() + Send>;

/// Non-blocking hop onto the primary execution context.
///
/// Hosts back this with their main run loop (e.g., `DispatchQueue.main`, a
/// GTK main context, or an event-loop proxy). `dispatch` must return
/// immediately; the task runs later, in submission order.
pub trait MainExecutor: Send + Sync {
    /// Queue `task` for execution on the primary context.
    fn dispatch(&self, task: MainTask);
}

/// Executor that runs tasks inline on the calling thread.
///
/// Suitable for hosts whose bridge callbacks already arrive on the primary
/// context, and for tests, where inline execution keeps event ordering
/// deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl MainExecutor for InlineExecutor {
    fn dispatch(&self, task: MainTask) {
        task();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn inline_executor_runs_task_immediately() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);

        InlineExecutor.dispatch(Box::new(move || flag.store(true, Ordering::SeqCst)));

        assert!(ran.load(Ordering::SeqCst));
    }
}
