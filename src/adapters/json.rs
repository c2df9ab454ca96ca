use crate::domain::model::Movie;
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use std::io::Write;

/// Emits one JSON object per line, for piping into other tools.
#[derive(Debug)]
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, value: &serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn movies(&mut self, heading: &str, movies: &[&Movie]) -> Result<()> {
        self.emit(&serde_json::json!({ "heading": heading, "movies": movies }))
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.emit(&serde_json::json!({ "notice": message }))
    }

    fn failure(&mut self, message: &str) -> Result<()> {
        self.emit(&serde_json::json!({ "error": message }))
    }
}
