pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::Settings, CliConfig};

pub use crate::adapters::{json::JsonPresenter, terminal::TextPresenter, DisplayFormat};
pub use crate::app::{
    command::Command,
    shell::{Flow, Shell, ShellSummary},
};
pub use crate::core::{
    catalog::Catalog,
    ordering::{compare_titles, SortOrder, TitleCollator},
    seed::builtin_movies,
};
pub use crate::domain::{model::Movie, ports::Presenter, query::Query};
pub use crate::utils::error::{CatalogError, Result};
