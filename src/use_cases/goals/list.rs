use crate::{
    error_500,
    goals::types::{GoalListQuery, GoalVisible},
    UseCaseError,
};
use db_adapters::{
    goal_adapter::{GoalAdapter, GoalFilter, GoalOrder, GoalQuery},
    Order::Asc,
};

pub async fn list_goals<'a>(
    params: GoalListQuery,
    goal_adapter: GoalAdapter<'a>,
) -> Result<Vec<GoalVisible>, UseCaseError> {
    let goal_adapter = match params.status {
        Some(status) => goal_adapter.filter_eq_status(status),
        None => goal_adapter,
    };
    goal_adapter
        .order_by_created_at(Asc)
        .order_by_id(Asc)
        .get_all()
        .await
        .map(|goals| goals.iter().map(GoalVisible::from).collect::<Vec<_>>())
        .map_err(error_500)
}
