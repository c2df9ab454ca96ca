// Adapters layer: concrete presenters the shell renders through.

pub mod json;
pub mod terminal;

use crate::domain::ports::Presenter;
use std::io::Write;

/// Output styles selectable from the command line or the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    #[default]
    Text,
    Json,
}

impl DisplayFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(DisplayFormat::Text),
            "json" => Some(DisplayFormat::Json),
            _ => None,
        }
    }

    pub fn presenter<'a, W: Write + 'a>(self, out: W) -> Box<dyn Presenter + 'a> {
        match self {
            DisplayFormat::Text => Box::new(terminal::TextPresenter::new(out)),
            DisplayFormat::Json => Box::new(json::JsonPresenter::new(out)),
        }
    }
}
