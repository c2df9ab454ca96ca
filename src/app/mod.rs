// Presentation layer: turns typed lines into catalog calls and renders the results.

pub mod command;
pub mod shell;
