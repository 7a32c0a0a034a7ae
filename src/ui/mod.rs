//! Terminal User Interface module.
//!
//! This module provides the TUI for the catalog browser:
//! - Main event loop (`run`)
//! - Input handling for home, results, search, and overlay modes
//! - Rendering for the tile grid, results list, and load states
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - View rendering dispatch
//! - `home` - Category tile grid
//! - `results` - Results list widget
//! - `picker` - Category picker overlay
//! - `help` - Keybinding help overlay
//! - `status` - Status bar widget

mod events;
mod help;
mod home;
mod input;
mod loop_runner;
mod picker;
mod render;
mod results;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
