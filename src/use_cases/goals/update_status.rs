use uuid::Uuid;

use crate::{
    error_500,
    goals::types::{GoalStatusUpdateRequest, GoalVisible},
    UseCaseError,
};
use db_adapters::goal_adapter::{GoalAdapter, GoalMutation, GoalQuery};

pub async fn update_goal_status<'a>(
    params: GoalStatusUpdateRequest,
    goal_id: Uuid,
    goal_adapter: GoalAdapter<'a>,
) -> Result<GoalVisible, UseCaseError> {
    let goal = goal_adapter
        .clone()
        .get_by_id(goal_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Goal with this id was not found".to_string(),
        ))?;

    goal_adapter
        .update_status(goal, params.status)
        .await
        .map(GoalVisible::from)
        .map_err(error_500)
}
