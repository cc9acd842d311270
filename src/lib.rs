//! inplace - Elm-style click-to-edit widget
//!
//! This crate provides the state machine behind an in-place editing widget:
//! a label that turns into a single-field form, submits it, and turns back
//! into a label. Everything the widget needs from the page (rendering,
//! focus, dialogs, the network) goes through commands and the
//! [`runtime::Host`] trait.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod messages;
pub mod model;
pub mod replay;
pub mod runtime;
pub mod tracing;
pub mod transport;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WidgetConfig;
pub use messages::Msg;
pub use model::WidgetModel;
pub use runtime::Controller;
