//! Client side of the goal tracker: the session's goal list, the pending
//! "add goal" draft and the progress numbers every view renders.
//!
//! All remote work goes through [`GoalService`] and [`DescriptionGenerator`];
//! [`HttpGoalService`] implements both against the `/api/goals` endpoints.

mod error;
mod goal;
mod progress;
mod service;
mod store;

pub use error::{DashboardError, ServiceError};
pub use goal::{Goal, GoalDraft, GoalId, GoalStatus};
pub use progress::Progress;
pub use service::{DescriptionGenerator, GoalService, HttpGoalService};
pub use store::DashboardState;
