pub mod catalog;
pub mod ordering;
pub mod seed;
