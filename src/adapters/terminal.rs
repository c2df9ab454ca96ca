use crate::domain::model::{Movie, MAX_RATING};
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use std::io::Write;

const RULE: &str = "----------------------------------------";

/// Plain-text rendering, one movie per block.
#[derive(Debug)]
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn format_details(movie: &Movie) -> String {
    format!(
        "({}) - ID: {} | Rating: {}/{}",
        movie.year(),
        movie.id(),
        movie.rating(),
        MAX_RATING
    )
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn movies(&mut self, heading: &str, movies: &[&Movie]) -> Result<()> {
        writeln!(self.out, "{}", heading)?;

        if movies.is_empty() {
            writeln!(self.out, "No Movies to Display")?;
        }

        for movie in movies {
            writeln!(self.out, "{}", movie.title())?;
            writeln!(self.out, "{}", format_details(movie))?;
            writeln!(self.out, "{}", RULE)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }

    fn failure(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "error: {}", message)?;
        self.out.flush()?;
        Ok(())
    }
}
