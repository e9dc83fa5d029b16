// Store layer - database repositories
pub mod log_store;
pub mod role_store;
pub mod stoplist_store;
pub mod user_store;

pub use log_store::{LogFilter, LogStore};
pub use role_store::RoleStore;
pub use stoplist_store::{StoplistFilter, StoplistStore};
pub use user_store::UserStore;
