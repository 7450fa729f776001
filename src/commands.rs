//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::ai::GenerationRequest;

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command
    #[default]
    None,
    /// Request a redraw of the focused block or AI panel
    Redraw,
    /// Block sequence changed; page breaks must be recomputed
    Repaginate,
    /// Persist the open script through the document store
    SaveScript,
    /// Hand a request to the text generator; the result comes back as
    /// `AiMsg::Completed`
    RequestGeneration(GenerationRequest),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Cmd::None))
            .collect();

        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.into_iter().next().unwrap_or_default(),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Redraw + repaginate + save, the follow-up to any content change
    pub fn content_changed() -> Self {
        Cmd::Batch(vec![Cmd::Repaginate, Cmd::SaveScript, Cmd::Redraw])
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None | Cmd::SaveScript | Cmd::RequestGeneration(_) => false,
            Cmd::Redraw | Cmd::Repaginate => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Check if this command changes the block sequence
    pub fn needs_repaginate(&self) -> bool {
        match self {
            Cmd::Repaginate => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_repaginate()),
            _ => false,
        }
    }

    /// Flatten batches into individual commands, in order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// The generation request carried by this command, if any
    pub fn generation_request(&self) -> Option<&GenerationRequest> {
        match self {
            Cmd::RequestGeneration(req) => Some(req),
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::generation_request),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_collapses() {
        assert!(matches!(Cmd::batch(vec![Cmd::None]), Cmd::None));
        assert!(matches!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]), Cmd::Redraw));
        assert!(matches!(
            Cmd::batch(vec![Cmd::Redraw, Cmd::SaveScript]),
            Cmd::Batch(_)
        ));
    }

    #[test]
    fn test_content_changed_flags() {
        let cmd = Cmd::content_changed();
        assert!(cmd.needs_redraw());
        assert!(cmd.needs_repaginate());
        assert_eq!(cmd.flatten().len(), 3);
    }
}
