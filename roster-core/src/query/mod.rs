//! Sort parameters and the comparators behind them.

pub mod sorting;
pub mod types;

pub use sorting::{compare_users, sort_users_slice};
pub use types::SortOrder;
