//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after all points have been integrated (once per sub-step).
    fn on_integrate(&mut self) {}

    /// Called after each full relaxation pass over the constraints.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
