use actix_web::{http, test};
use chrono::{Duration, Utc};
use entities::sea_orm_active_enums::GoalStatus;
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::goals::types::GoalVisible;
use web_adapters::ErrorResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let now = Utc::now();
    let older = factory::goal()
        .title("older".to_string())
        .created_at((now - Duration::minutes(5)).into())
        .insert(&db)
        .await?;
    let newer = factory::goal()
        .title("newer".to_string())
        .status(GoalStatus::Completed)
        .created_at(now.into())
        .insert(&db)
        .await?;

    let req = test::TestRequest::get().uri("/api/goals").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<GoalVisible> = test::read_body_json(resp).await;
    assert_eq!(res, vec![GoalVisible::from(older), GoalVisible::from(newer)]);

    Ok(())
}

#[actix_web::test]
async fn empty_list() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get().uri("/api/goals").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<GoalVisible> = test::read_body_json(resp).await;
    assert!(res.is_empty());

    Ok(())
}

#[actix_web::test]
async fn status_query() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::goal().insert(&db).await?;
    let in_progress = factory::goal()
        .status(GoalStatus::InProgress)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/goals?status=In%20Progress")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<GoalVisible> = test::read_body_json(resp).await;
    assert_eq!(res, vec![GoalVisible::from(in_progress)]);

    Ok(())
}

#[actix_web::test]
async fn body_uses_wire_labels() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let goal = factory::goal()
        .title("Learn Rust".to_string())
        .description("Read the book".to_string())
        .status(GoalStatus::NotStarted)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get().uri("/api/goals").to_request();

    let resp = test::call_service(&app, req).await;
    let res: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        res,
        serde_json::json!([{
            "id": goal.id.to_string(),
            "title": "Learn Rust",
            "description": "Read the book",
            "status": "Not Started",
        }])
    );

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_status_query_is_unknown() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/goals?status=Abandoned")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert!(res.error.contains("Abandoned"));

    Ok(())
}
