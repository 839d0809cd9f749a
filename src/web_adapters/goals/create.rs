use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::goal_adapter::GoalAdapter;
use sea_orm::DbConn;
use use_cases::{
    goals::{create::create_goal, types::GoalCreateRequest},
    UseCaseError,
};

use crate::utils::{response_400, response_500};

#[tracing::instrument(name = "Creating a goal", skip(db))]
#[post("")]
pub async fn create_goal_endpoint(db: Data<DbConn>, req: Json<GoalCreateRequest>) -> HttpResponse {
    match create_goal(req.into_inner(), GoalAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Created().json(res),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}
