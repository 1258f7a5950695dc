//! Domain types.

pub mod users;
