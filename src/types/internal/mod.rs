pub mod auth;
pub mod operator;
pub mod stoplist;

pub use operator::Operator;
