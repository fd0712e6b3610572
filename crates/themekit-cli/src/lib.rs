//! Library side of the `themekit` command-line tool.

pub mod listing;
pub mod logging;
