use uuid::Uuid;

use crate::{error_500, UseCaseError};
use db_adapters::goal_adapter::{GoalAdapter, GoalMutation, GoalQuery};

pub async fn delete_goal<'a>(
    goal_id: Uuid,
    goal_adapter: GoalAdapter<'a>,
) -> Result<(), UseCaseError> {
    let goal = goal_adapter
        .clone()
        .get_by_id(goal_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Goal with this id was not found".to_string(),
        ))?;

    goal_adapter.delete(goal).await.map_err(error_500)
}
