use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::goal_adapter::GoalAdapter;
use sea_orm::DbConn;
use use_cases::{goals::get::get_goal, UseCaseError};

use crate::utils::{response_404, response_500};

#[derive(serde::Deserialize, Debug)]
struct PathParam {
    goal_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a goal", skip(db))]
#[get("/{goal_id}")]
pub async fn get_goal_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_goal(path_param.goal_id, GoalAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
