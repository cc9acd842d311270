//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The state machine never touches the network, dialogs or focus directly;
//! it returns a [`Cmd`] and the runtime hands it to the host.

use crate::model::TriggerId;
use crate::transport::{FormRequest, RequestId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// The page view changed and should be redrawn
    Redraw,
    /// Focus the editor input and place the caret
    FocusInput { field_id: String, caret: usize },
    /// Ask the confirmation dialog; the answer comes back as
    /// `FormMsg::ConfirmAnswered`
    Confirm { prompt: String },
    /// Fire an asynchronous request; completion comes back as
    /// `TransportMsg::Completed`
    SendRequest { id: RequestId, request: FormRequest },
    /// Submit the form the old-fashioned way (page navigation)
    Navigate { request: FormRequest },
    /// Simulate a click on a trigger (chaining)
    Activate(TriggerId),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::FocusInput { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Dialogs and requests report back through messages
            Cmd::Confirm { .. } => false,
            Cmd::SendRequest { .. } => false,
            Cmd::Navigate { .. } => false,
            // The activation itself redraws
            Cmd::Activate(_) => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(&self) -> Vec<&Cmd> {
        match self {
            Cmd::None => vec![],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.flatten()).collect(),
            other => vec![other],
        }
    }
}
