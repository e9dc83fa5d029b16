pub mod admin;
pub mod auth;
pub mod stoplist;

pub use admin::AdminApiError;
pub use auth::{AuthError, ErrorBody};
pub use stoplist::StoplistApiError;
