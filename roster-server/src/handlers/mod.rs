pub mod users;

pub use users::{ListUsersParams, list_users_handler};
