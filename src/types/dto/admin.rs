use poem_openapi::Object;

use crate::types::db::{role, user};

/// Request model for creating an operator account
#[derive(Object, Debug)]
pub struct CreateUserRequest {
    #[oai(validator(min_length = 1, max_length = 64))]
    pub login: String,
    #[oai(validator(min_length = 1))]
    pub password: String,
    #[oai(default = "default_active")]
    pub active: bool,
    /// Role names to assign (must already exist)
    #[oai(default)]
    pub roles: Vec<String>,
}

fn default_active() -> bool {
    true
}

/// Request model for editing an operator account
#[derive(Object, Debug, Default)]
pub struct UpdateUserRequest {
    pub password: Option<String>,
    pub active: Option<bool>,
    pub roles: Option<Vec<String>>,
}

/// Response model for an operator account
///
/// The password hash is never exposed.
#[derive(Object, Debug)]
pub struct UserResponse {
    pub id: i32,
    pub login: String,
    pub active: bool,
    pub roles: Vec<String>,
}

impl UserResponse {
    pub fn from_model(user: user::Model, roles: Vec<role::Model>) -> Self {
        Self {
            id: user.id,
            login: user.login,
            active: user.active,
            roles: roles.into_iter().map(|r| r.name).collect(),
        }
    }
}

/// Request model for creating a role
#[derive(Object, Debug)]
pub struct CreateRoleRequest {
    #[oai(validator(min_length = 1, max_length = 30))]
    pub name: String,
    pub description: Option<String>,
}

/// Response model for a role
#[derive(Object, Debug)]
pub struct RoleResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<role::Model> for RoleResponse {
    fn from(m: role::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}
