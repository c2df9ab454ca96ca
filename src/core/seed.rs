use crate::domain::model::Movie;
use crate::utils::error::Result;

const BUILTIN: [(i64, &str, i32, u8); 14] = [
    (2, "The Princess Bride", 1987, 5),
    (6, "Labyrinth", 1986, 5),
    (1, "The NeverEnding Story", 1984, 5),
    (4, "Spy", 2015, 5),
    (8, "Rat Race", 2001, 5),
    (13, "Thor", 2011, 3),
    (10, "The Mask", 1994, 5),
    (14, "The Open House", 2018, 1),
    (5, "Stand by Me", 1986, 5),
    (9, "The Notebook", 2004, 5),
    (7, "The Shawshank Redemption", 1994, 5),
    (3, "Interstellar", 2014, 4),
    (11, "Citizen Kane", 1941, 1),
    (12, "Breakfast at Tiffany's", 1961, 2),
];

/// The base list a fresh catalog starts with, in load order.
pub fn builtin_movies() -> Result<Vec<Movie>> {
    BUILTIN
        .iter()
        .map(|&(id, title, year, rating)| Movie::new(id, title, year, rating))
        .collect()
}
