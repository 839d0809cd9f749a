use actix_web::{
    put,
    web::{Data, Json, Path},
    HttpResponse,
};
use db_adapters::goal_adapter::GoalAdapter;
use sea_orm::DbConn;
use use_cases::{
    goals::{types::GoalStatusUpdateRequest, update_status::update_goal_status},
    UseCaseError,
};

use crate::utils::{response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    goal_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a goal's status", skip(db, path_param))]
#[put("/{goal_id}")]
pub async fn update_goal_status_endpoint(
    db: Data<DbConn>,
    req: Json<GoalStatusUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match update_goal_status(
        req.into_inner(),
        path_param.goal_id,
        GoalAdapter::init(&db),
    )
    .await
    {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
