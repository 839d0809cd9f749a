mod goals;
mod utils;

pub use goals::goal_routes;
pub use utils::ErrorResponse;
