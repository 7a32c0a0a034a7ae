//! toolshelf — a terminal directory browser for a curated tool catalog.
//!
//! The catalog is a static JSON list of tools (name, description, category,
//! link) loaded once at startup from a URL or a local file. The UI offers a
//! home view of fixed category tiles, a category picker, free-text search,
//! and a results list with open-in-browser links.

pub mod app;
pub mod catalog;
pub mod config;
pub mod theme;
pub mod ui;
pub mod util;
