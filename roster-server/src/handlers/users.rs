use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use roster_core::User;
use tracing::{debug, warn};

use crate::{errors::AppResult, infra::app_state::AppState};

/// Raw `sort` / `order` query parameters.
///
/// A parameter given more than once is joined with `,` into a single value;
/// such a value never names a field or an order, so it is rejected by the
/// usual validation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListUsersParams {
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ListUsersParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "sort" => &mut params.sort,
                "order" => &mut params.order,
                _ => continue,
            };
            match slot.as_mut() {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                None => *slot = Some(value),
            }
        }
        params
    }
}

/// `GET /`: list users, optionally sorted.
pub async fn list_users_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<User>>> {
    let Query(pairs) = query?;
    let params = ListUsersParams::from_pairs(pairs);

    match state
        .users()
        .list(params.sort.as_deref(), params.order.as_deref())
    {
        Ok(users) => {
            debug!(
                sort = ?params.sort,
                order = ?params.order,
                count = users.len(),
                "listing users"
            );
            Ok(Json(users))
        }
        Err(err) => {
            warn!(
                sort = ?params.sort,
                order = ?params.order,
                error = %err,
                "rejected user listing parameters"
            );
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn picks_sort_and_order_and_ignores_the_rest() {
        let params = ListUsersParams::from_pairs(pairs(&[
            ("page", "2"),
            ("sort", "name"),
            ("order", "desc"),
        ]));
        assert_eq!(params.sort.as_deref(), Some("name"));
        assert_eq!(params.order.as_deref(), Some("desc"));
    }

    #[test]
    fn repeated_parameters_are_joined() {
        let params = ListUsersParams::from_pairs(pairs(&[
            ("sort", "name"),
            ("sort", "id"),
            ("order", ""),
            ("order", ""),
        ]));
        assert_eq!(params.sort.as_deref(), Some("name,id"));
        assert_eq!(params.order.as_deref(), Some(","));
    }

    #[test]
    fn empty_values_are_kept_for_validation() {
        let params = ListUsersParams::from_pairs(pairs(&[("order", "")]));
        assert_eq!(params.sort, None);
        assert_eq!(params.order.as_deref(), Some(""));
    }
}
