use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range};
use serde::Serialize;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A cataloged movie. Fields are private so a value is only ever built through
/// [`Movie::new`] and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    id: i64,
    title: String,
    year: i32,
    rating: u8,
}

impl Movie {
    /// Builds a movie, trimming the title. Fails with `InvalidRecord` when the
    /// title is blank or the rating falls outside 1..=5.
    pub fn new(id: i64, title: impl Into<String>, year: i32, rating: u8) -> Result<Self> {
        let title = title.into();
        validate_non_empty_string("title", &title)?;
        validate_range("rating", rating, MIN_RATING, MAX_RATING)?;

        Ok(Self {
            id,
            title: title.trim().to_string(),
            year,
            rating,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }
}
