use crate::domain::model::Movie;
use std::fmt;

/// Search key shared by `Catalog::search` and `Catalog::remove`.
///
/// A movie matches when its id, written as text, equals the query exactly, or
/// when its title contains the query ignoring case. The empty query matches
/// every movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    lowered: String,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lowered = text.to_lowercase();
        Self { text, lowered }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        movie.id().to_string() == self.text || movie.title().to_lowercase().contains(&self.lowered)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query::new(text)
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Query::new(text)
    }
}

impl From<&String> for Query {
    fn from(text: &String) -> Self {
        Query::new(text.as_str())
    }
}

impl From<i64> for Query {
    fn from(id: i64) -> Self {
        Query::new(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str) -> Movie {
        Movie::new(id, title, 2000, 3).unwrap()
    }

    #[test]
    fn test_matches_id_exactly() {
        let query = Query::from(1);
        assert!(query.matches(&movie(1, "Apple")));
        assert!(!query.matches(&movie(11, "Apple")));
        assert!(Query::from("11").matches(&movie(11, "Apple")));
    }

    #[test]
    fn test_matches_title_substring_ignoring_case() {
        let query = Query::from("APP");
        assert!(query.matches(&movie(1, "Pineapple")));
        assert!(!query.matches(&movie(2, "Banana")));
    }

    #[test]
    fn test_id_and_title_predicates_are_a_union() {
        // "2" hits movie 2 by id and movie 7 by its title.
        let query = Query::from("2");
        assert!(query.matches(&movie(2, "Heat")));
        assert!(query.matches(&movie(7, "Blade Runner 2049")));
        assert!(!query.matches(&movie(3, "Heat")));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = Query::from("");
        assert!(query.is_empty());
        assert!(query.matches(&movie(1, "Anything")));
    }

    #[test]
    fn test_numeric_query_text_form() {
        assert_eq!(Query::from(42).as_str(), "42");
        assert_eq!(Query::from(-5).to_string(), "-5");
    }
}
