use tracing::{event, Level};

use crate::{
    error::DashboardError,
    goal::{Goal, GoalDraft, GoalId, GoalStatus},
    progress::Progress,
    service::{DescriptionGenerator, GoalService},
};

/// Everything one dashboard session holds.
///
/// `goals` only changes after the service has confirmed a request. A failed
/// request leaves every field as it was except `error`, which keeps the
/// message until [`DashboardState::dismiss_error`] is called.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    goals: Vec<Goal>,
    draft: GoalDraft,
    is_dialog_open: bool,
    error: Option<DashboardError>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn draft(&self) -> &GoalDraft {
        &self.draft
    }

    pub fn is_dialog_open(&self) -> bool {
        self.is_dialog_open
    }

    pub fn error(&self) -> Option<&DashboardError> {
        self.error.as_ref()
    }

    pub fn progress(&self) -> Progress {
        Progress::from_goals(&self.goals)
    }

    pub fn open_dialog(&mut self) {
        self.is_dialog_open = true;
    }

    /// Closing keeps the draft, so reopening shows what was typed.
    pub fn close_dialog(&mut self) {
        self.is_dialog_open = false;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Replaces the list with the service's, in the service's order.
    pub async fn load<S: GoalService>(&mut self, service: &S) -> Result<(), DashboardError> {
        match service.list_goals().await {
            Ok(goals) => {
                self.goals = goals;
                Ok(())
            }
            Err(e) => Err(self.record(DashboardError::FetchFailed(e))),
        }
    }

    /// Submits the draft. A draft with a blank title or description sends
    /// nothing and changes nothing.
    pub async fn create<S: GoalService>(&mut self, service: &S) -> Result<(), DashboardError> {
        if !self.draft.is_submittable() {
            event!(target: "dashboard", Level::DEBUG, "Ignoring incomplete goal draft.");
            return Ok(());
        }
        match service.create_goal(&self.draft).await {
            Ok(goal) => {
                self.goals.push(goal);
                self.draft = GoalDraft::default();
                self.is_dialog_open = false;
                Ok(())
            }
            Err(e) => Err(self.record(DashboardError::CreateFailed(e))),
        }
    }

    /// Fills the draft with `title` and `description`, then submits it.
    pub async fn create_goal<S: GoalService>(
        &mut self,
        service: &S,
        title: &str,
        description: &str,
    ) -> Result<(), DashboardError> {
        self.draft = GoalDraft::new(title, description);
        self.create(service).await
    }

    /// Applies the record the service sends back, never the requested status
    /// on its own.
    pub async fn update_status<S: GoalService>(
        &mut self,
        service: &S,
        id: &GoalId,
        status: GoalStatus,
    ) -> Result<(), DashboardError> {
        match service.update_goal_status(id, status).await {
            Ok(updated) => {
                if let Some(goal) = self.goals.iter_mut().find(|goal| &goal.id == id) {
                    *goal = updated;
                }
                Ok(())
            }
            Err(e) => Err(self.record(DashboardError::UpdateFailed(e))),
        }
    }

    pub async fn delete<S: GoalService>(
        &mut self,
        service: &S,
        id: &GoalId,
    ) -> Result<(), DashboardError> {
        match service.delete_goal(id).await {
            Ok(()) => {
                self.goals.retain(|goal| &goal.id != id);
                Ok(())
            }
            Err(e) => Err(self.record(DashboardError::DeleteFailed(e))),
        }
    }

    /// Drafts a description from the draft title. Only the draft description
    /// is written, and only on success.
    pub async fn generate_description<G: DescriptionGenerator>(
        &mut self,
        generator: &G,
    ) -> Result<(), DashboardError> {
        let title = self.draft.title.trim().to_string();
        if title.is_empty() {
            return Ok(());
        }
        match generator.generate_description(&title).await {
            Ok(description) => {
                self.draft.description = description;
                Ok(())
            }
            Err(e) => Err(self.record(DashboardError::GenerationFailed(e))),
        }
    }

    fn record(&mut self, error: DashboardError) -> DashboardError {
        event!(target: "dashboard", Level::WARN, "{}", error);
        self.error = Some(error.clone());
        error
    }
}
