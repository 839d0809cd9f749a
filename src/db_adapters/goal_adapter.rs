use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    Order, QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::{
    goal::{ActiveModel, Column, Entity, Model},
    sea_orm_active_enums::GoalStatus,
};

#[derive(Clone)]
pub struct GoalAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> GoalAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait GoalFilter {
    fn filter_eq_status(self, status: GoalStatus) -> Self;
}

impl GoalFilter for GoalAdapter<'_> {
    fn filter_eq_status(mut self, status: GoalStatus) -> Self {
        self.query = self.query.filter(Column::Status.eq(status));
        self
    }
}

pub trait GoalOrder {
    fn order_by_created_at(self, order: Order) -> Self;
    fn order_by_id(self, order: Order) -> Self;
}

impl GoalOrder for GoalAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }

    fn order_by_id(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Id, order);
        self
    }
}

pub trait GoalQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl GoalQuery for GoalAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct CreateGoalParams {
    pub title: String,
    pub description: String,
}

pub trait GoalMutation {
    fn create(self, params: CreateGoalParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_status(
        self,
        goal: Model,
        status: GoalStatus,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, goal: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl GoalMutation for GoalAdapter<'_> {
    async fn create(self, params: CreateGoalParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(params.title),
            description: Set(params.description),
            status: Set(GoalStatus::NotStarted),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn update_status(self, goal: Model, status: GoalStatus) -> Result<Model, DbErr> {
        let mut goal = goal.into_active_model();
        goal.status = Set(status);
        goal.updated_at = Set(Utc::now().into());
        goal.update(self.db).await
    }

    async fn delete(self, goal: Model) -> Result<(), DbErr> {
        goal.delete(self.db).await.map(|_| ())
    }
}
