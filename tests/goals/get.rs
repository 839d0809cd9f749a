use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::goals::types::GoalVisible;
use web_adapters::ErrorResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let goal = factory::goal()
        .description("Train for 6 months".to_string())
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/goals/{}", goal.id))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: GoalVisible = test::read_body_json(resp).await;
    assert_eq!(res, GoalVisible::from(goal));

    Ok(())
}

#[actix_web::test]
async fn not_found_if_missing() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/goals/{}", uuid::Uuid::now_v7()))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(res.error, "Goal with this id was not found");

    Ok(())
}

#[actix_web::test]
async fn not_found_if_id_is_malformed() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/goals/not-a-uuid")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(res.error, "Goal with this id was not found");

    Ok(())
}
