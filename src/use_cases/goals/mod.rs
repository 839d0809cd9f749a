pub mod types;

pub mod create;
pub mod delete;
pub mod generate_description;
pub mod get;
pub mod list;
pub mod text_generator;
pub mod update_status;
