//! User records and their sortable fields.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::ValidationError;

/// A single roster entry.
///
/// Serializes as `{"name": .., "id": ..}`; the key order matches
/// [`UserField::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Numeric identifier. Not guaranteed to match the directory position.
    pub id: i64,
}

impl User {
    /// Build a user from its parts.
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// Borrow the value stored under `field`.
    pub fn value(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Name => FieldValue::Text(&self.name),
            UserField::Id => FieldValue::Number(self.id),
        }
    }
}

/// Declared value type of a sortable field. Decides which comparator is
/// used when sorting by that field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Integer values, ordered numerically.
    Number,
    /// String values, ordered by locale-aware collation.
    Text,
}

/// A borrowed field value of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Value of a [`FieldKind::Number`] field.
    Number(i64),
    /// Value of a [`FieldKind::Text`] field.
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Kind of the wrapped value.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Text(_) => FieldKind::Text,
        }
    }

    /// The wrapped integer, if this is a number.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    /// The wrapped string, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

/// Fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    /// `name`, a text field.
    Name,
    /// `id`, a numeric field.
    Id,
}

impl UserField {
    /// Every sortable field, in record key order.
    pub const ALL: [UserField; 2] = [UserField::Name, UserField::Id];

    /// Wire name used in the `sort` query parameter and in the JSON body.
    pub const fn as_str(self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Id => "id",
        }
    }

    /// Declared kind of this field's values.
    pub const fn kind(self) -> FieldKind {
        match self {
            UserField::Name => FieldKind::Text,
            UserField::Id => FieldKind::Number,
        }
    }

    /// All field names joined with `,`, as listed in
    /// [`ValidationError::InvalidSort`].
    pub fn joined_names() -> String {
        Self::ALL
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(ValidationError::InvalidSort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in UserField::ALL {
            assert_eq!(field.as_str().parse::<UserField>(), Ok(field));
        }
    }

    #[test]
    fn field_lookup_is_case_sensitive() {
        assert_eq!(
            "Name".parse::<UserField>(),
            Err(ValidationError::InvalidSort)
        );
        assert_eq!(
            " id".parse::<UserField>(),
            Err(ValidationError::InvalidSort)
        );
    }

    #[test]
    fn declared_kinds_match_stored_values() {
        let user = User::new("Jorn", 0);
        for field in UserField::ALL {
            assert_eq!(user.value(field).kind(), field.kind(), "{field}");
        }
    }

    #[test]
    fn field_values_expose_only_their_own_kind() {
        let user = User::new("Mike", 1);
        assert_eq!(user.value(UserField::Id).as_number(), Some(1));
        assert_eq!(user.value(UserField::Id).as_text(), None);
        assert_eq!(user.value(UserField::Name).as_text(), Some("Mike"));
        assert_eq!(user.value(UserField::Name).as_number(), None);
    }

    #[test]
    fn serializes_name_before_id() {
        let json = serde_json::to_string(&User::new("Ori", 4)).unwrap();
        assert_eq!(json, r#"{"name":"Ori","id":4}"#);
    }

    #[test]
    fn joined_names_follow_record_key_order() {
        assert_eq!(UserField::joined_names(), "name,id");
    }
}
