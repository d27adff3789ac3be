//! Category list handling.

/// Synthetic category meaning "no filter".
pub const ALL_CATEGORIES: &str = "ALL";

/// Sort the server's category names ascending and prepend [`ALL_CATEGORIES`].
pub fn with_all_category(mut categories: Vec<String>) -> Vec<String> {
    categories.sort();
    let mut result = Vec::with_capacity(categories.len() + 1);
    result.push(ALL_CATEGORIES.to_string());
    result.extend(categories);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_with_all_first() {
        let categories = vec!["Personal Care".into(), "Apparel".into(), "Electronics".into()];
        assert_eq!(
            with_all_category(categories),
            vec!["ALL", "Apparel", "Electronics", "Personal Care"]
        );
    }

    #[test]
    fn test_empty_list_yields_all_only() {
        assert_eq!(with_all_category(Vec::new()), vec!["ALL"]);
    }

    #[test]
    fn test_sort_is_bytewise() {
        let categories = vec!["b".into(), "B".into(), "a".into()];
        assert_eq!(with_all_category(categories), vec!["ALL", "B", "a", "b"]);
    }
}
