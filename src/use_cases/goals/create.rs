use crate::{
    error_500,
    goals::types::{GoalCreateRequest, GoalVisible},
    UseCaseError,
};
use db_adapters::goal_adapter::{CreateGoalParams, GoalAdapter, GoalMutation};

pub async fn create_goal<'a>(
    params: GoalCreateRequest,
    goal_adapter: GoalAdapter<'a>,
) -> Result<GoalVisible, UseCaseError> {
    if params.title.trim().is_empty() {
        return Err(UseCaseError::BadRequest(
            "Goal title must not be empty.".to_string(),
        ));
    }

    goal_adapter
        .create(CreateGoalParams {
            title: params.title,
            description: params.description,
        })
        .await
        .map(GoalVisible::from)
        .map_err(error_500)
}
