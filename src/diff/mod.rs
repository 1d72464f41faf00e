//! Planner - Source selection and plan generation

mod compare;
mod plan;

pub use compare::select_source;
pub use plan::{generate_sync_plan, SyncPlan};
