pub mod goal_adapter;

pub use sea_orm::Order;
