//! Tests for comparator dispatch and slice sorting

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::{
        domain::users::{FieldKind, FieldValue, User, UserDirectory, UserField},
        query::{
            sorting::{comparator_for, compare_users, sort_users_slice},
            types::SortOrder,
        },
    };

    fn seeded() -> Vec<User> {
        UserDirectory::seeded().users().to_vec()
    }

    fn ids(users: &[User]) -> Vec<i64> {
        users.iter().map(|u| u.id).collect()
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_numeric_comparator_orders_by_value() {
        let compare = comparator_for(FieldKind::Number);
        assert_eq!(
            compare(FieldValue::Number(2), FieldValue::Number(10)),
            Ordering::Less
        );
        assert_eq!(
            compare(FieldValue::Number(-1), FieldValue::Number(-1)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_text_comparator_uses_collation() {
        let compare = comparator_for(FieldKind::Text);
        assert_eq!(
            compare(FieldValue::Text("bob"), FieldValue::Text("Alice")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_descending_swaps_operands() {
        let jorn = User::new("Jorn", 0);
        let ori = User::new("Ori", 4);
        assert_eq!(
            compare_users(&jorn, &ori, UserField::Id, SortOrder::Ascending),
            Ordering::Less
        );
        assert_eq!(
            compare_users(&jorn, &ori, UserField::Id, SortOrder::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn test_sort_by_id_ascending() {
        let mut users = seeded();
        sort_users_slice(&mut users, UserField::Id, SortOrder::Ascending);
        assert_eq!(ids(&users), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_by_id_descending() {
        let mut users = seeded();
        sort_users_slice(&mut users, UserField::Id, SortOrder::Descending);
        assert_eq!(ids(&users), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_sort_by_name_both_directions() {
        let mut users = seeded();
        sort_users_slice(&mut users, UserField::Name, SortOrder::Ascending);
        assert_eq!(
            names(&users),
            vec!["Andrew", "Jorn", "Markus", "Mike", "Ori"]
        );

        sort_users_slice(&mut users, UserField::Name, SortOrder::Descending);
        assert_eq!(
            names(&users),
            vec!["Ori", "Mike", "Markus", "Jorn", "Andrew"]
        );
    }

    #[test]
    fn test_ties_keep_insertion_order_in_both_directions() {
        let users = vec![
            User::new("Sam", 7),
            User::new("Alex", 1),
            User::new("Sam", 3),
            User::new("Alex", 9),
        ];

        let mut asc = users.clone();
        sort_users_slice(&mut asc, UserField::Name, SortOrder::Ascending);
        assert_eq!(ids(&asc), vec![1, 9, 7, 3]);

        let mut desc = users;
        sort_users_slice(&mut desc, UserField::Name, SortOrder::Descending);
        assert_eq!(ids(&desc), vec![7, 3, 1, 9]);
    }

    #[test]
    fn test_sorted_slice_agrees_with_compare_users() {
        for field in UserField::ALL {
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                let mut users = seeded();
                sort_users_slice(&mut users, field, order);
                for pair in users.windows(2) {
                    assert_ne!(
                        compare_users(&pair[0], &pair[1], field, order),
                        Ordering::Greater,
                        "{field} {order}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_sorted_projection_is_monotonic_for_every_field() {
        for field in UserField::ALL {
            let compare = comparator_for(field.kind());
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                let mut users = seeded();
                sort_users_slice(&mut users, field, order);
                for pair in users.windows(2) {
                    let ordering =
                        compare(pair[0].value(field), pair[1].value(field));
                    let allowed = match order {
                        SortOrder::Ascending => ordering.is_le(),
                        SortOrder::Descending => ordering.is_ge(),
                    };
                    assert!(
                        allowed,
                        "{field} {order}: {:?} then {:?}",
                        pair[0], pair[1]
                    );
                }
            }
        }
    }
}
