// Database entity definitions (SeaORM)
pub mod log_entry;
pub mod role;
pub mod stoplist;
pub mod user;
pub mod user_role;
