use crate::core::ordering::{SortOrder, TitleCollator};
use crate::core::seed::builtin_movies;
use crate::domain::model::Movie;
use crate::domain::query::Query;
use crate::utils::error::{CatalogError, Result};

/// An ordered, in-memory collection of movies with unique ids.
///
/// Insertion order is kept until one of the sort operations reorders the
/// stored sequence in place. The catalog assumes a single writer; hosts that
/// share it across threads must serialize access themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `movies` in iteration order, failing on the first
    /// duplicate id.
    pub fn with_movies<I>(movies: I) -> Result<Self>
    where
        I: IntoIterator<Item = Movie>,
    {
        let mut catalog = Self::new();
        for movie in movies {
            catalog.add(movie)?;
        }
        Ok(catalog)
    }

    /// A catalog holding the built-in base list.
    pub fn seeded() -> Result<Self> {
        Self::with_movies(builtin_movies()?)
    }

    /// Appends `movie`. The catalog is left untouched when the id is taken.
    pub fn add(&mut self, movie: Movie) -> Result<()> {
        if self.contains_id(movie.id()) {
            tracing::warn!("Rejected duplicate movie id {}", movie.id());
            return Err(CatalogError::DuplicateId { id: movie.id() });
        }

        tracing::debug!("Adding movie {} ({})", movie.id(), movie.title());
        self.movies.push(movie);
        Ok(())
    }

    pub fn get_all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, id: i64) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id() == id)
    }

    pub fn contains_id(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Every movie whose id equals the query or whose title contains it,
    /// in stored order. An empty query returns the whole catalog.
    pub fn search(&self, query: impl Into<Query>) -> Vec<&Movie> {
        let query = query.into();
        let results: Vec<&Movie> = self.movies.iter().filter(|m| query.matches(m)).collect();
        tracing::debug!("Search '{}' matched {} movies", query, results.len());
        results
    }

    /// Deletes every movie `search` would return for the same query. Returns
    /// whether anything was removed.
    pub fn remove(&mut self, query: impl Into<Query>) -> bool {
        let query = query.into();
        let before = self.movies.len();
        self.movies.retain(|m| !query.matches(m));
        let removed = before - self.movies.len();

        tracing::debug!("Remove '{}' deleted {} movies", query, removed);
        removed > 0
    }

    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::TitleAscending => self.sort_by_title_ascending(),
            SortOrder::TitleDescending => self.sort_by_title_descending(),
            SortOrder::RatingDescending => self.sort_by_rating_descending(),
        }
    }

    pub fn sort_by_title_ascending(&mut self) {
        let mut collator = TitleCollator::new();
        self.movies.sort_by(|a, b| collator.compare(a.title(), b.title()));
    }

    pub fn sort_by_title_descending(&mut self) {
        let mut collator = TitleCollator::new();
        self.movies.sort_by(|a, b| collator.compare(b.title(), a.title()));
    }

    /// Highest rating first. Equal ratings keep their current relative order.
    pub fn sort_by_rating_descending(&mut self) {
        self.movies.sort_by(|a, b| b.rating().cmp(&a.rating()));
    }
}
