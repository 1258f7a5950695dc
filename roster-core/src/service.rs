//! Validated user listing.

use tracing::debug;

use crate::{
    domain::users::{User, UserDirectory, UserField},
    error::ValidationError,
    query::{sorting::sort_users_slice, types::SortOrder},
};

/// Validated listing over a [`UserDirectory`].
///
/// Stateless apart from the directory it reads; every call works on its own
/// copy of the records, so one instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct UserListService {
    directory: UserDirectory,
}

impl UserListService {
    /// Service over `directory`.
    pub fn new(directory: UserDirectory) -> Self {
        Self { directory }
    }

    /// Directory backing this service.
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// List users from raw `sort` / `order` query parameters.
    ///
    /// Empty strings count as absent. Checks run in this order:
    ///
    /// 1. an `order` without a `sort` fails with
    ///    [`ValidationError::NoSortParam`]
    /// 2. no `sort` returns the directory in insertion order
    /// 3. an unknown `sort` fails with [`ValidationError::InvalidSort`],
    ///    whatever the `order`
    /// 4. an `order` other than `asc` / `desc` fails with
    ///    [`ValidationError::InvalidOrder`]
    /// 5. a missing `order` defaults to ascending
    pub fn list(
        &self,
        sort: Option<&str>,
        order: Option<&str>,
    ) -> Result<Vec<User>, ValidationError> {
        let sort = sort.filter(|raw| !raw.is_empty());
        let order = order.filter(|raw| !raw.is_empty());

        let Some(sort) = sort else {
            if order.is_some() {
                return Err(ValidationError::NoSortParam);
            }
            return Ok(self.directory.users().to_vec());
        };

        let field: UserField = sort.parse()?;
        let order = order
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();

        Ok(self.sorted(field, order))
    }

    /// Copy of the directory sorted by `field` and `order`.
    pub fn sorted(&self, field: UserField, order: SortOrder) -> Vec<User> {
        let mut users = self.directory.users().to_vec();
        sort_users_slice(&mut users, field, order);
        debug!(%field, %order, count = users.len(), "sorted user listing");
        users
    }
}
