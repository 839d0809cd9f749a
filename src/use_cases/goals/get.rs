use uuid::Uuid;

use crate::{error_500, goals::types::GoalVisible, UseCaseError};
use db_adapters::goal_adapter::{GoalAdapter, GoalQuery};

pub async fn get_goal<'a>(
    goal_id: Uuid,
    goal_adapter: GoalAdapter<'a>,
) -> Result<GoalVisible, UseCaseError> {
    goal_adapter
        .get_by_id(goal_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Goal with this id was not found".to_string(),
        ))
        .map(GoalVisible::from)
}
