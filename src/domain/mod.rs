// Domain layer: the movie value, the search key and the rendering port. No I/O here.

pub mod model;
pub mod ports;
pub mod query;
