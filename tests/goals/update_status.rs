use actix_web::{http, test};
use entities::{goal, sea_orm_active_enums::GoalStatus};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::goals::types::{GoalStatusUpdateRequest, GoalVisible};
use web_adapters::ErrorResponse;

use crate::utils::{init_app, Connections};
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let goal = factory::goal().insert(&db).await?;
    let other = factory::goal().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/goals/{}", goal.id))
        .set_json(GoalStatusUpdateRequest {
            status: GoalStatus::Completed,
        })
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: GoalVisible = test::read_body_json(resp).await;
    assert_eq!(res.id, goal.id);
    assert_eq!(res.title, goal.title);
    assert_eq!(res.status, GoalStatus::Completed);

    let goal_in_db = goal::Entity::find_by_id(goal.id).one(&db).await?.unwrap();
    assert_eq!(goal_in_db.status, GoalStatus::Completed);
    assert!(goal_in_db.updated_at >= goal.updated_at);

    let other_in_db = goal::Entity::find_by_id(other.id).one(&db).await?.unwrap();
    assert_eq!(other_in_db.status, GoalStatus::NotStarted);

    Ok(())
}

#[actix_web::test]
async fn not_found_if_missing() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/goals/{}", uuid::Uuid::now_v7()))
        .set_json(GoalStatusUpdateRequest {
            status: GoalStatus::InProgress,
        })
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_status_is_unknown() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let goal = factory::goal().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/goals/{}", goal.id))
        .set_json(serde_json::json!({ "status": "Abandoned" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert!(res.error.contains("Abandoned"));

    let goal_in_db = goal::Entity::find_by_id(goal.id).one(&db).await?.unwrap();
    assert_eq!(goal_in_db.status, GoalStatus::NotStarted);

    Ok(())
}
