//! Sorting of user listings
//!
//! The comparator is picked once per listing from the sort field's declared
//! [`FieldKind`]: numbers compare numerically, text compares through
//! [`collation`]. A descending listing swaps the operands rather than
//! reversing the result, so equal keys keep insertion order in both
//! directions.

pub mod collation;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

use crate::{
    domain::users::{FieldKind, FieldValue, User, UserField},
    query::types::SortOrder,
};

/// Ordering between two field values of the same kind.
pub type ValueComparator = fn(FieldValue<'_>, FieldValue<'_>) -> Ordering;

/// Comparator for values of `kind`.
pub fn comparator_for(kind: FieldKind) -> ValueComparator {
    match kind {
        FieldKind::Number => compare_numbers,
        FieldKind::Text => compare_text,
    }
}

fn compare_numbers(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
    a.as_number().cmp(&b.as_number())
}

fn compare_text(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
    collation::compare(
        a.as_text().unwrap_or_default(),
        b.as_text().unwrap_or_default(),
    )
}

/// Compare two users by `field` in the given direction.
pub fn compare_users(
    a: &User,
    b: &User,
    field: UserField,
    order: SortOrder,
) -> Ordering {
    let (lhs, rhs) = match order {
        SortOrder::Ascending => (a, b),
        SortOrder::Descending => (b, a),
    };
    comparator_for(field.kind())(lhs.value(field), rhs.value(field))
}

/// Stable in-place sort of `users` by `field` and `order`.
pub fn sort_users_slice(
    users: &mut [User],
    field: UserField,
    order: SortOrder,
) {
    users.sort_by(|a, b| compare_users(a, b, field, order));
}
