//! # Presentation Layer
//!
//! MVVM-style console output. The data flow is strictly unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! * `view_models/` hold raw data (dates, ids, hex colors), never pre-formatted
//!   strings, because `--format json` dumps them as-is.
//! * `presenters/` turn engine and runtime output into view models and decide
//!   which badge and suggestions to attach.
//! * `views/` implement `fmt::Display`: layout, truncation and colors.
//! * `renderers/` choose between JSON and text.
//! * `formatters/` are small string helpers shared by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, RenderOptions, StatusBadge, StatusLevel,
};
