use sea_orm::{DerivePartialModel, FromQueryResult};

use entities::{goal, prelude::Goal, sea_orm_active_enums::GoalStatus};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, DerivePartialModel, FromQueryResult, PartialEq, Debug)]
#[sea_orm(entity = "Goal")]
pub struct GoalVisible {
    pub id: uuid::Uuid,
    pub title: String,
    pub description: String,
    pub status: GoalStatus,
}

impl From<&goal::Model> for GoalVisible {
    fn from(item: &goal::Model) -> Self {
        GoalVisible {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            status: item.status,
        }
    }
}

impl From<goal::Model> for GoalVisible {
    fn from(item: goal::Model) -> Self {
        GoalVisible::from(&item)
    }
}

#[derive(Deserialize, Debug, Serialize, Default)]
pub struct GoalListQuery {
    pub status: Option<GoalStatus>,
}

#[derive(Deserialize, Debug, Serialize)]
pub struct GoalCreateRequest {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Serialize)]
pub struct GoalStatusUpdateRequest {
    pub status: GoalStatus,
}

#[derive(Deserialize, Debug, Serialize)]
pub struct DescriptionGenerationRequest {
    pub title: String,
}

#[derive(Deserialize, Debug, Serialize, PartialEq)]
pub struct DescriptionGenerationResponse {
    pub description: String,
}
