//! Validation errors for listing parameters.

use thiserror::Error;

use crate::domain::users::UserField;

/// Rejection of the raw `sort` / `order` parameters.
///
/// The messages are part of the HTTP contract and are returned verbatim in
/// the `400` body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// An `order` was supplied without a `sort` field.
    #[error("Cannot have order parameter without sort parameter.")]
    NoSortParam,

    /// `sort` does not name a [`UserField`].
    #[error(
        "Sort parameter must be one of these user properties: {}",
        UserField::joined_names()
    )]
    InvalidSort,

    /// `order` is neither `asc` nor `desc`.
    #[error("Order parameter must be either asc or desc.")]
    InvalidOrder,
}
