//! Searchbar - Main Library
//!
//! An animated search bar for egui hosts. The bar slides down from the top of
//! the screen, offers a back button and a clear button around a single-line
//! text input, and slides away again when dismissed.
//!
//! # Module Structure
//!
//! - **`shared`** - Backend-independent types
//!   - Configuration (TOML/JSON loadable, validated)
//!   - Platform metrics
//!   - Error types
//!
//! - **`search_bar`** - The component itself
//!   - Visibility state and its transitions
//!   - Show/hide sequencing with deferred hide completion
//!   - Injected timer schedulers (frame-polled, manual, tokio)
//!   - Input delegate routing events to host callbacks
//!
//! - **`egui_app`** - egui rendering
//!   - `SearchBar::ui` widget
//!   - Color names and frame styles
//!   - Demo application (`searchbar_demo` binary)
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use searchbar::search_bar::{Callbacks, SearchBar};
//! use searchbar::shared::SearchBarConfig;
//!
//! let query = Rc::new(RefCell::new(String::new()));
//! let sink = Rc::clone(&query);
//! let mut bar = SearchBar::new(
//!     SearchBarConfig::default(),
//!     Callbacks::new(move |text| *sink.borrow_mut() = text.to_string()),
//! );
//! bar.show();
//!
//! // Each frame, inside an egui `Ui`:
//! // let current = query.borrow().clone();
//! // bar.ui(ui, &current);
//! ```
//!
//! # Threading
//!
//! The bar lives on the UI thread. Timers never run code by themselves: the
//! bar drains due timers when it is drawn or polled.
//!
//! # Error Handling
//!
//! Showing, hiding and input routing cannot fail. Errors only come from
//! loading configuration (`shared::config::ConfigError`) and from building a
//! tokio scheduler outside a runtime (`shared::error::SearchBarError`).

/// Shared types and configuration
pub mod shared;

/// The search bar component
pub mod search_bar;

/// egui rendering and demo host
pub mod egui_app;
