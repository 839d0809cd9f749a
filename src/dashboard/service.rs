use std::future::Future;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    error::ServiceError,
    goal::{Goal, GoalDraft, GoalId, GoalStatus},
};

/// The remote goal collection.
pub trait GoalService {
    fn list_goals(&self) -> impl Future<Output = Result<Vec<Goal>, ServiceError>>;
    fn create_goal(&self, draft: &GoalDraft) -> impl Future<Output = Result<Goal, ServiceError>>;
    fn update_goal_status(
        &self,
        id: &GoalId,
        status: GoalStatus,
    ) -> impl Future<Output = Result<Goal, ServiceError>>;
    fn delete_goal(&self, id: &GoalId) -> impl Future<Output = Result<(), ServiceError>>;
}

/// Drafts a description from a goal title.
pub trait DescriptionGenerator {
    fn generate_description(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<String, ServiceError>>;
}

#[derive(Serialize)]
struct StatusUpdateBody {
    status: GoalStatus,
}

#[derive(Serialize)]
struct DescriptionRequestBody<'a> {
    title: &'a str,
}

#[derive(Deserialize)]
struct DescriptionResponseBody {
    description: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Talks to the goal tracker's `/api/goals` endpoints. Description drafting
/// is also served there, so no inference credential lives on the client.
#[derive(Debug, Clone)]
pub struct HttpGoalService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGoalService {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn goals_url(&self) -> String {
        format!("{}/api/goals", self.base_url)
    }

    /// The id is pushed as a single percent-encoded path segment.
    fn goal_url(&self, id: &GoalId) -> Result<reqwest::Url, ServiceError> {
        let mut url = reqwest::Url::parse(&self.goals_url())
            .map_err(|e| ServiceError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ServiceError::InvalidUrl(self.base_url.clone()))?
            .push(id.as_str());
        Ok(url)
    }
}

impl GoalService for HttpGoalService {
    async fn list_goals(&self) -> Result<Vec<Goal>, ServiceError> {
        let res = self
            .client
            .get(self.goals_url())
            .send()
            .await
            .map_err(transport)?;
        read_json(res).await
    }

    async fn create_goal(&self, draft: &GoalDraft) -> Result<Goal, ServiceError> {
        let res = self
            .client
            .post(self.goals_url())
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        read_json(res).await
    }

    async fn update_goal_status(
        &self,
        id: &GoalId,
        status: GoalStatus,
    ) -> Result<Goal, ServiceError> {
        let res = self
            .client
            .put(self.goal_url(id)?)
            .json(&StatusUpdateBody { status })
            .send()
            .await
            .map_err(transport)?;
        read_json(res).await
    }

    async fn delete_goal(&self, id: &GoalId) -> Result<(), ServiceError> {
        let res = self
            .client
            .delete(self.goal_url(id)?)
            .send()
            .await
            .map_err(transport)?;
        check_status(res).await.map(|_| ())
    }
}

impl DescriptionGenerator for HttpGoalService {
    async fn generate_description(&self, title: &str) -> Result<String, ServiceError> {
        let res = self
            .client
            .post(format!("{}/description", self.goals_url()))
            .json(&DescriptionRequestBody { title })
            .send()
            .await
            .map_err(transport)?;
        read_json::<DescriptionResponseBody>(res)
            .await
            .map(|body| body.description)
    }
}

fn transport(e: reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(error_body) => error_body.error,
        Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
    };
    Err(ServiceError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ServiceError> {
    let body = check_status(res).await?.bytes().await.map_err(transport)?;
    serde_json::from_slice(&body).map_err(|e| ServiceError::InvalidBody(e.to_string()))
}
