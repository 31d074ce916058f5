//! egui Rendering Module
//!
//! Draws the search bar with egui/eframe and hosts the demo application.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs     - Module exports and documentation
//! ├── main.rs    - Demo application entry point (binary)
//! ├── config.rs  - Demo config file discovery
//! ├── widget.rs  - SearchBar::ui and the per-frame response
//! └── theme/     - Color names, frames and buttons
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the demo:
//! // cargo run --bin searchbar_demo
//! ```

pub mod config;
pub mod theme;
pub mod widget;

pub use config::DemoConfig;
pub use theme::BarTheme;
pub use widget::SearchBarResponse;
