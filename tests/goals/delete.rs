use actix_web::{http, test};
use entities::goal;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{init_app, Connections};
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let goal = factory::goal().insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/goals/{}", goal.id))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

    let goal_in_db = goal::Entity::find_by_id(goal.id).one(&db).await?;
    assert!(goal_in_db.is_none());

    Ok(())
}

#[actix_web::test]
async fn not_found_if_missing() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/goals/{}", uuid::Uuid::now_v7()))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn second_delete_is_not_found() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let goal = factory::goal().insert(&db).await?;

    for expected in [http::StatusCode::NO_CONTENT, http::StatusCode::NOT_FOUND] {
        let req = test::TestRequest::delete()
            .uri(&format!("/api/goals/{}", goal.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }

    Ok(())
}
