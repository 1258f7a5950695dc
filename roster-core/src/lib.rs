//! # Roster Core
//!
//! Domain types and the listing service behind the Roster HTTP endpoint.
//!
//! ## Overview
//!
//! The crate holds a fixed directory of users and answers one question:
//! "give me the users, optionally sorted by a field and a direction".
//!
//! - [`domain::users`]: the [`User`] record, its sortable [`UserField`]s and
//!   the seeded [`UserDirectory`]
//! - [`query`]: [`SortOrder`] parsing and the per-kind comparators
//! - [`service`]: [`UserListService::list`], which validates raw query
//!   parameters before sorting
//! - [`error`]: the [`ValidationError`] returned for rejected parameters
//!
//! ## Examples
//!
//! ```
//! use roster_core::{UserDirectory, UserListService};
//!
//! let service = UserListService::new(UserDirectory::seeded());
//! let users = service.list(Some("id"), Some("desc")).unwrap();
//! assert_eq!(users.first().map(|u| u.id), Some(4));
//! ```

pub mod domain;
pub mod error;
pub mod query;
pub mod service;

pub use domain::users::{FieldKind, FieldValue, User, UserDirectory, UserField};
pub use error::ValidationError;
pub use query::types::SortOrder;
pub use service::UserListService;
