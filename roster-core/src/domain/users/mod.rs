//! Users and the directory they are served from.

pub mod directory;
pub mod user;

pub use directory::UserDirectory;
pub use user::{FieldKind, FieldValue, User, UserField};
