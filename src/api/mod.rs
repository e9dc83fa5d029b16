// API layer - HTTP endpoints
pub mod auth;
pub mod health;
pub mod helpers;
pub mod logs;
pub mod roles;
pub mod stoplist;
pub mod users;
pub mod views;

pub use auth::AuthApi;
pub use health::HealthApi;
pub use logs::LogApi;
pub use roles::RoleApi;
pub use stoplist::StoplistApi;
pub use users::UserApi;
pub use views::ViewsApi;
