use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::stores::stoplist_store::is_unique_violation;
use crate::types::db::role;
use crate::types::db::user::{self, Entity as User};
use crate::types::db::user_role;

/// Repository for operator accounts
///
/// Owns password hashing and the users/roles join table. The uniquifier
/// token is generated on first save if absent and never regenerated.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an operator account with the given roles
    ///
    /// Role names must already exist. The password is hashed with Argon2id;
    /// a fresh uniquifier is generated.
    ///
    /// # Errors
    ///
    /// `DuplicateLogin` when the login is taken, `RoleNotFound` when a role
    /// name does not resolve.
    pub async fn create(
        &self,
        login: &str,
        password: &str,
        active: bool,
        role_names: &[String],
    ) -> Result<user::Model, InternalError> {
        let roles = self.resolve_roles(role_names).await?;
        let password_hash = hash_password(password)?;

        let model = user::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            login: Set(login.to_string()),
            password: Set(password_hash),
            active: Set(active),
            uniquifier: Set(Uuid::new_v4().simple().to_string()),
        };

        let created = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                InternalError::DuplicateLogin(login.to_string())
            } else {
                InternalError::database("insert_user", e)
            }
        })?;

        self.replace_role_assignments(created.id, &roles).await?;

        Ok(created)
    }

    pub async fn find_by_login(&self, login: &str) -> Result<Option<user::Model>, InternalError> {
        User::find()
            .filter(user::Column::Login.eq(login))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, InternalError> {
        User::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user", e))
    }

    /// Apply account changes; absent fields are left unchanged
    ///
    /// Regenerates nothing: an existing uniquifier is preserved verbatim,
    /// and one is only minted when the stored value is empty.
    pub async fn update(
        &self,
        id: i32,
        password: Option<&str>,
        active: Option<bool>,
        role_names: Option<&[String]>,
    ) -> Result<user::Model, InternalError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| InternalError::UserNotFound(id.to_string()))?;

        let roles = match role_names {
            Some(names) => Some(self.resolve_roles(names).await?),
            None => None,
        };

        let needs_uniquifier = current.uniquifier.is_empty();
        let mut model: user::ActiveModel = current.into();
        if let Some(password) = password {
            model.password = Set(hash_password(password)?);
        }
        if let Some(active) = active {
            model.active = Set(active);
        }
        if needs_uniquifier {
            model.uniquifier = Set(Uuid::new_v4().simple().to_string());
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_user", e))?;

        if let Some(roles) = roles {
            self.replace_role_assignments(updated.id, &roles).await?;
        }

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        User::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_user", e))?;
        Ok(())
    }

    /// List accounts with their roles, optionally filtered by login substring
    pub async fn list(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<(user::Model, Vec<role::Model>)>, InternalError> {
        let mut query = User::find();
        if let Some(search) = search {
            query = query.filter(user::Column::Login.like(format!("%{}%", search)));
        }

        query
            .order_by_asc(user::Column::Id)
            .find_with_related(role::Entity)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_users", e))
    }

    pub async fn roles_for(&self, user: &user::Model) -> Result<Vec<role::Model>, InternalError> {
        user.find_related(role::Entity)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_roles", e))
    }

    /// Check a login/password pair
    ///
    /// Returns the account and its roles on success, `None` when the login
    /// is unknown or the password does not verify. The active flag is left
    /// for the caller to interpret.
    pub async fn verify_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<(user::Model, Vec<role::Model>)>, InternalError> {
        let user = match self.find_by_login(login).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let parsed_hash = match PasswordHash::new(&user.password) {
            Ok(hash) => hash,
            Err(_) => return Ok(None),
        };

        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_err()
        {
            return Ok(None);
        }

        let roles = self.roles_for(&user).await?;
        Ok(Some((user, roles)))
    }

    async fn resolve_roles(&self, names: &[String]) -> Result<Vec<role::Model>, InternalError> {
        let mut roles = Vec::with_capacity(names.len());
        for name in names {
            let role = role::Entity::find()
                .filter(role::Column::Name.eq(name.clone()))
                .one(&self.db)
                .await
                .map_err(|e| InternalError::database("find_role", e))?
                .ok_or_else(|| InternalError::RoleNotFound(name.clone()))?;
            roles.push(role);
        }
        Ok(roles)
    }

    async fn replace_role_assignments(
        &self,
        user_id: i32,
        roles: &[role::Model],
    ) -> Result<(), InternalError> {
        user_role::Entity::delete_many()
            .filter(user_role::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("clear_role_assignments", e))?;

        // exec_without_returning: the composite key cannot be refetched by
        // last-insert-id
        for role in roles {
            let link = user_role::ActiveModel {
                user_id: Set(user_id),
                role_id: Set(role.id),
            };
            user_role::Entity::insert(link)
                .exec_without_returning(&self.db)
                .await
                .map_err(|e| InternalError::database("assign_role", e))?;
        }

        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::crypto("hash_password", e.to_string()))
}
