//! Sort order parameter.

use std::{fmt, str::FromStr};

use crate::error::ValidationError;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest first. Used when a sort field is given without an order.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Wire name used in the `order` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(ValidationError::InvalidOrder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_lowercase_literals() {
        assert_eq!("asc".parse(), Ok(SortOrder::Ascending));
        assert_eq!("desc".parse(), Ok(SortOrder::Descending));
        for raw in ["ASC", "Desc", "ascending", "up", ""] {
            assert_eq!(
                raw.parse::<SortOrder>(),
                Err(ValidationError::InvalidOrder),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn defaults_to_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }
}
