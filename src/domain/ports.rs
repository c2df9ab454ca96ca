use crate::domain::model::Movie;
use crate::utils::error::Result;

/// Rendering seam between the shell and whatever displays the catalog.
pub trait Presenter {
    fn movies(&mut self, heading: &str, movies: &[&Movie]) -> Result<()>;
    fn notice(&mut self, message: &str) -> Result<()>;
    fn failure(&mut self, message: &str) -> Result<()>;
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn movies(&mut self, heading: &str, movies: &[&Movie]) -> Result<()> {
        (**self).movies(heading, movies)
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        (**self).notice(message)
    }

    fn failure(&mut self, message: &str) -> Result<()> {
        (**self).failure(message)
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn movies(&mut self, heading: &str, movies: &[&Movie]) -> Result<()> {
        (**self).movies(heading, movies)
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        (**self).notice(message)
    }

    fn failure(&mut self, message: &str) -> Result<()> {
        (**self).failure(message)
    }
}
