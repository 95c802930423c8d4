pub mod create_user;

pub use create_user::{create_user_definition, create_user_schema};
