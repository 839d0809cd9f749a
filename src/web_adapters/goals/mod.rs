mod create;
mod delete;
mod generate_description;
mod get;
mod list;
mod update_status;

use actix_web::web::{scope, JsonConfig, PathConfig, QueryConfig, ServiceConfig};

use crate::utils::{json_error_handler, path_error_handler, query_error_handler};

pub fn goal_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/goals")
            .app_data(JsonConfig::default().error_handler(json_error_handler))
            .app_data(QueryConfig::default().error_handler(query_error_handler))
            .app_data(PathConfig::default().error_handler(path_error_handler))
            .service(list::list_goals_endpoint)
            .service(create::create_goal_endpoint)
            .service(generate_description::generate_description_endpoint)
            .service(get::get_goal_endpoint)
            .service(update_status::update_goal_status_endpoint)
            .service(delete::delete_goal_endpoint),
    );
}
