use chrono::{DateTime, FixedOffset, Utc};
use entities::{goal, sea_orm_active_enums::GoalStatus};
use sea_orm::Set;
use uuid::Uuid;

pub fn goal() -> goal::ActiveModel {
    let now = Utc::now();
    goal::ActiveModel {
        id: Set(Uuid::now_v7()),
        title: Set("goal".to_string()),
        description: Set("description".to_string()),
        status: Set(GoalStatus::NotStarted),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait GoalFactory {
    fn title(self, title: String) -> goal::ActiveModel;
    fn description(self, description: String) -> goal::ActiveModel;
    fn status(self, status: GoalStatus) -> goal::ActiveModel;
    fn created_at(self, created_at: DateTime<FixedOffset>) -> goal::ActiveModel;
}

impl GoalFactory for goal::ActiveModel {
    fn title(mut self, title: String) -> goal::ActiveModel {
        self.title = Set(title);
        self
    }

    fn description(mut self, description: String) -> goal::ActiveModel {
        self.description = Set(description);
        self
    }

    fn status(mut self, status: GoalStatus) -> goal::ActiveModel {
        self.status = Set(status);
        self
    }

    fn created_at(mut self, created_at: DateTime<FixedOffset>) -> goal::ActiveModel {
        self.created_at = Set(created_at);
        self
    }
}
