use actix_web::{
    delete,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::goal_adapter::GoalAdapter;
use sea_orm::DbConn;
use use_cases::{goals::delete::delete_goal, UseCaseError};

use crate::utils::{response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    goal_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a goal", skip(db, path_param))]
#[delete("/{goal_id}")]
pub async fn delete_goal_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match delete_goal(path_param.goal_id, GoalAdapter::init(&db)).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
