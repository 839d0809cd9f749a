use actix_web::{http, test};
use entities::{goal, sea_orm_active_enums::GoalStatus};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use use_cases::goals::types::{GoalCreateRequest, GoalVisible};
use web_adapters::ErrorResponse;

use crate::utils::{init_app, Connections};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/goals")
        .set_json(GoalCreateRequest {
            title: "Run a marathon".to_string(),
            description: "Train for 6 months".to_string(),
        })
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let res: GoalVisible = test::read_body_json(resp).await;
    assert_eq!(res.title, "Run a marathon");
    assert_eq!(res.description, "Train for 6 months");
    assert_eq!(res.status, GoalStatus::NotStarted);

    let goal_in_db = goal::Entity::find_by_id(res.id).one(&db).await?.unwrap();
    assert_eq!(GoalVisible::from(goal_in_db), res);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_title_is_blank() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/goals")
        .set_json(GoalCreateRequest {
            title: "   ".to_string(),
            description: "Train for 6 months".to_string(),
        })
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert!(!res.error.is_empty());
    assert_eq!(goal::Entity::find().count(&db).await?, 0);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_body_is_incomplete() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/goals")
        .set_json(serde_json::json!({ "title": "Run a marathon" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert!(res.error.contains("description"));

    Ok(())
}
