// Main library file for the trip planner client

// Export modules for each part of the client
pub mod config;
pub mod model;
pub mod orchestrator;
pub mod render;
pub mod source;

// Re-export key types for convenience
pub use config::PlannerConfig;
pub use model::{ActivityBlock, DayPlan, MealBlock, PlanRequest, PlanResult, SourceResponse};
pub use orchestrator::{PlanError, PlanSession};
pub use render::{render, CalendarView, DaySection, TimeSlot};
pub use source::{FixtureSource, LiveSource, PlanSource, ResponseMode};
