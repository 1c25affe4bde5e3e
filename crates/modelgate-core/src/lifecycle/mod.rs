//! Store lifecycle against catalog events
//!
//! Reacts to model add/replace/delete events so no stale credential
//! outlives its owning model.

mod reconciler;

pub use reconciler::{LifecycleReconciler, ReconcileOutcome};
