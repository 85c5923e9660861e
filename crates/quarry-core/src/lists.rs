//! Parsing of comma-separated command arguments.

use crate::errors::CoreError;

/// Split on `,`, trim each entry, drop empty entries.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Permission list from an optional argument.
///
/// `None` yields `defaults`. Entries are trimmed and keep their order.
#[must_use]
pub fn parse_permissions(raw: Option<&str>, defaults: &[String]) -> Vec<String> {
    raw.map_or_else(
        || defaults.to_vec(),
        |raw| raw.split(',').map(|p| p.trim().to_string()).collect(),
    )
}

/// Parse comma-separated integer ids.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the first entry that is not an id.
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>, CoreError> {
    split_list(raw)
        .into_iter()
        .map(|item| {
            item.parse::<i64>()
                .map_err(|_| CoreError::Validation(format!("invalid group id '{item}'")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn defaults() -> Vec<String> {
        vec!["create_dashboard".into(), "view_query".into()]
    }

    #[rstest]
    #[case("create_query, edit_query", &["create_query", "edit_query"])]
    #[case("view_query,create_query", &["view_query", "create_query"])]
    #[case("  admin  ", &["admin"])]
    fn permissions_are_trimmed_in_order(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_permissions(Some(raw), &defaults()), expected);
    }

    #[test]
    fn absent_permissions_use_defaults() {
        assert_eq!(parse_permissions(None, &defaults()), defaults());
    }

    #[rstest]
    #[case("example.org, example.com", &["example.org", "example.com"])]
    #[case("example.org,,", &["example.org"])]
    #[case("", &[])]
    fn split_list_drops_empty_entries(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(split_list(raw), expected);
    }

    #[test]
    fn id_list_parses_integers() {
        assert_eq!(parse_id_list("1, 2,3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn id_list_rejects_names() {
        let err = parse_id_list("1,admin").unwrap_err();
        assert!(err.to_string().contains("invalid group id 'admin'"));
    }
}
