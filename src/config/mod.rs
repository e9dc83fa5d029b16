mod ami;
mod database;
mod logging;
mod policy;

pub use ami::AmiConfig;
pub use database::{init_database, migrate};
pub use logging::init_logging;
pub use policy::StoplistPolicy;
