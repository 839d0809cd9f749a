use thiserror::Error;

/// Failure of a single request to the goal service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    InvalidBody(String),
    #[error("invalid service url: {0}")]
    InvalidUrl(String),
}

/// One variant per remote operation. The message is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Could not load goals ({0}).")]
    FetchFailed(ServiceError),
    #[error("Could not add the goal ({0}).")]
    CreateFailed(ServiceError),
    #[error("Could not update the goal ({0}).")]
    UpdateFailed(ServiceError),
    #[error("Could not delete the goal ({0}).")]
    DeleteFailed(ServiceError),
    #[error("Could not draft a description ({0}).")]
    GenerationFailed(ServiceError),
}
