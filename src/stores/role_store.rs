use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::types::db::role::{self, Entity as Role};

/// Repository for capability roles
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<role::Model>, InternalError> {
        Role::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_role", e))
    }

    /// Fetch a role by name, creating it when absent
    pub async fn find_or_create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<role::Model, InternalError> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok(existing);
        }

        let model = role::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(name.to_string()),
            description: Set(description.map(|d| d.to_string())),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_role", e))
    }

    pub async fn list(&self) -> Result<Vec<role::Model>, InternalError> {
        Role::find()
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_roles", e))
    }
}
