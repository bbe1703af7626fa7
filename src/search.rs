//! Case-insensitive substring search over named text fields.

/// Records that expose text fields to [`filter_by_term`] by name.
pub trait Searchable {
    /// Returns the value of the named field, or `None` if it is unset or unknown.
    fn search_field(&self, field: &str) -> Option<&str>;
}

/// Keeps the items where any of `fields` contains `term`, ignoring case.
///
/// The term is trimmed first; a blank term keeps every item. Relative order is
/// preserved.
pub fn filter_by_term<T: Searchable>(items: Vec<T>, term: &str, fields: &[&str]) -> Vec<T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| {
            fields.iter().any(|field| {
                item.search_field(field)
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        title: &'static str,
        code: Option<&'static str>,
    }

    impl Searchable for Row {
        fn search_field(&self, field: &str) -> Option<&str> {
            match field {
                "title" => Some(self.title),
                "code" => self.code,
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                title: "Apple Juice",
                code: Some("789"),
            },
            Row {
                title: "Banana",
                code: None,
            },
            Row {
                title: "Pineapple",
                code: Some("123"),
            },
        ]
    }

    fn titles(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.title).collect()
    }

    #[test]
    fn blank_term_keeps_everything() {
        let result = filter_by_term(rows(), "   ", &["title"]);
        assert_eq!(titles(&result), vec!["Apple Juice", "Banana", "Pineapple"]);
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let result = filter_by_term(rows(), " APPLE ", &["title", "code"]);
        assert_eq!(titles(&result), vec!["Apple Juice", "Pineapple"]);

        let result = filter_by_term(rows(), "12", &["title", "code"]);
        assert_eq!(titles(&result), vec!["Pineapple"]);
    }

    #[test]
    fn unknown_and_missing_fields_never_match() {
        let result = filter_by_term(rows(), "banana", &["code", "unknown"]);
        assert!(result.is_empty());
    }
}
