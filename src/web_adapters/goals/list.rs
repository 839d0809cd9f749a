use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::goal_adapter::GoalAdapter;
use sea_orm::DbConn;
use use_cases::goals::{list::list_goals, types::GoalListQuery};

use crate::utils::response_500;

#[tracing::instrument(name = "Listing goals", skip(db))]
#[get("")]
pub async fn list_goals_endpoint(db: Data<DbConn>, query: Query<GoalListQuery>) -> HttpResponse {
    match list_goals(query.into_inner(), GoalAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => response_500(e),
    }
}
