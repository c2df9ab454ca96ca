use crate::app::command::{Command, HELP};
use crate::core::catalog::Catalog;
use crate::core::ordering::SortOrder;
use crate::domain::model::Movie;
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellSummary {
    pub commands: usize,
    pub failures: usize,
}

/// Line-oriented front end over a [`Catalog`].
///
/// The shell owns the catalog it is given and renders every result through
/// its presenter. Rejected input is reported and counted; only presenter
/// errors stop the session.
pub struct Shell<P: Presenter> {
    catalog: Catalog,
    presenter: P,
    summary: ShellSummary,
}

impl<P: Presenter> Shell<P> {
    pub fn new(catalog: Catalog, presenter: P) -> Self {
        Self {
            catalog,
            presenter,
            summary: ShellSummary::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn summary(&self) -> ShellSummary {
        self.summary
    }

    pub fn into_parts(self) -> (Catalog, P) {
        (self.catalog, self.presenter)
    }

    /// Applies one command. Input errors (duplicate id) come back as `Err`
    /// with the catalog unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::List => self.show_all("Movie List")?,
            Command::Add(movie) => {
                self.catalog.add(movie)?;
                self.presenter.notice("Movie added successfully!")?;
                self.show_all("Updated Movie List")?;
            }
            Command::Search(query) => {
                let results = self.catalog.search(query.as_str());
                if results.is_empty() {
                    self.presenter.notice("No results found")?;
                } else {
                    self.presenter.movies("Search Results", &results)?;
                }
            }
            Command::Sort(order) => {
                self.catalog.sort(order);
                self.show_all(sort_heading(order))?;
            }
            Command::Delete(query) => {
                if self.catalog.remove(query.as_str()) {
                    self.presenter.notice("Movie deleted successfully!")?;
                } else {
                    self.presenter.notice("No matching movie found")?;
                }
                self.show_all("Updated Movie List")?;
            }
            Command::Help => self.presenter.notice(HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parses and executes one line, reporting input errors through the
    /// presenter instead of returning them.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let outcome = match Command::parse(line) {
            Ok(None) => return Ok(Flow::Continue),
            Ok(Some(command)) => {
                self.summary.commands += 1;
                self.execute(command)
            }
            Err(e) => {
                self.summary.commands += 1;
                Err(e)
            }
        };

        match outcome {
            Err(e) if e.is_input_error() => {
                tracing::warn!("Rejected input '{}': {}", line.trim(), e);
                self.summary.failures += 1;
                self.presenter.failure(&e.user_friendly_message())?;
                Ok(Flow::Continue)
            }
            other => other,
        }
    }

    /// Reads commands until end of input or `quit`.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<ShellSummary> {
        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line)? == Flow::Quit {
                tracing::debug!("Quit requested");
                break;
            }
        }

        tracing::info!(
            "Session finished: {} commands, {} rejected, {} movies in catalog",
            self.summary.commands,
            self.summary.failures,
            self.catalog.len()
        );
        Ok(self.summary)
    }

    fn show_all(&mut self, heading: &str) -> Result<()> {
        let movies: Vec<&Movie> = self.catalog.get_all().iter().collect();
        self.presenter.movies(heading, &movies)
    }
}

fn sort_heading(order: SortOrder) -> &'static str {
    match order {
        SortOrder::TitleAscending => "Movies sorted A - Z",
        SortOrder::TitleDescending => "Movies sorted Z - A",
        SortOrder::RatingDescending => "Movies sorted High - Low Rating",
    }
}
