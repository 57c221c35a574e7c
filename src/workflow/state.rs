use crate::llm::client::CommitMessage;
use crate::llm::prompt::build_prompt;

/// Actions recognized while a drafted message is under review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Accept,
    AcceptAndAmend,
    Abort,
    Retry,
    SwitchModel,
    Refine,
    ShowPrompt,
    Help,
}

impl ReviewAction {
    /// Map raw user input to an action. Anything unrecognized aborts.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "" | "y" => Self::Accept,
            "a" => Self::AcceptAndAmend,
            "r" => Self::Retry,
            "m" => Self::SwitchModel,
            "e" => Self::Refine,
            "p" => Self::ShowPrompt,
            "h" | "?" => Self::Help,
            _ => Self::Abort,
        }
    }

    /// One-line-per-action legend printed by the help action
    pub fn legend() -> &'static str {
        "\u{2022} Enter/y  accept and commit\n\
         \u{2022} a        accept, then amend interactively\n\
         \u{2022} r        regenerate with the same prompt\n\
         \u{2022} m        pick a different model and regenerate\n\
         \u{2022} e        add instructions and regenerate\n\
         \u{2022} p        show the prompt sent to the model\n\
         \u{2022} h/?      show this help\n\
         \u{2022} anything else aborts"
    }
}

/// What the review loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Terminal: continue into the commit dispatcher
    Commit { amend: bool },
    /// Terminal: no commit, non-zero exit
    Abort,
    /// Run one new generation, then review again
    Regenerate(Regenerate),
    /// Stay in review without regenerating
    Stay(Notice),
}

/// How the next generation differs from the last one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regenerate {
    SamePrompt,
    NewModel,
    WithRefinement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ShowPrompt,
    Help,
}

/// The closed transition table of the review loop.
///
/// Pure so it can be tested without any terminal or model involved; the
/// driver performs the side effects each transition calls for.
pub fn transition(action: ReviewAction) -> Transition {
    match action {
        ReviewAction::Accept => Transition::Commit { amend: false },
        ReviewAction::AcceptAndAmend => Transition::Commit { amend: true },
        ReviewAction::Abort => Transition::Abort,
        ReviewAction::Retry => Transition::Regenerate(Regenerate::SamePrompt),
        ReviewAction::SwitchModel => Transition::Regenerate(Regenerate::NewModel),
        ReviewAction::Refine => Transition::Regenerate(Regenerate::WithRefinement),
        ReviewAction::ShowPrompt => Transition::Stay(Notice::ShowPrompt),
        ReviewAction::Help => Transition::Stay(Notice::Help),
    }
}

/// Transient per-invocation state threaded through the review loop
#[derive(Debug, Clone)]
pub struct WorkflowState {
    /// Current instruction text; always carries the diff verbatim
    pub prompt: String,
    /// Currently selected model identifier; non-empty before any generation
    pub model: String,
    /// Last successfully generated message
    pub message: Option<CommitMessage>,
    /// Accumulated user addendum folded into the prompt
    pub refinement: String,
}

impl WorkflowState {
    pub fn new(model: String, diff: &str) -> Self {
        Self {
            prompt: build_prompt("", diff),
            model,
            message: None,
            refinement: String::new(),
        }
    }

    /// Append a refinement and rebuild the prompt around the same diff
    pub fn push_refinement(&mut self, text: &str, diff: &str) {
        if !self.refinement.is_empty() {
            self.refinement.push('\n');
        }
        self.refinement.push_str(text);
        self.prompt = build_prompt(&self.refinement, diff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accept_variants() {
        assert_eq!(ReviewAction::parse(""), ReviewAction::Accept);
        assert_eq!(ReviewAction::parse("y"), ReviewAction::Accept);
        assert_eq!(ReviewAction::parse(" Y "), ReviewAction::Accept);
    }

    #[test]
    fn test_parse_unknown_input_aborts() {
        assert_eq!(ReviewAction::parse("x"), ReviewAction::Abort);
        assert_eq!(ReviewAction::parse("quit"), ReviewAction::Abort);
        assert_eq!(ReviewAction::parse("n"), ReviewAction::Abort);
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(
            transition(ReviewAction::Accept),
            Transition::Commit { amend: false }
        );
        assert_eq!(
            transition(ReviewAction::AcceptAndAmend),
            Transition::Commit { amend: true }
        );
        assert_eq!(transition(ReviewAction::Abort), Transition::Abort);
        assert_eq!(
            transition(ReviewAction::Retry),
            Transition::Regenerate(Regenerate::SamePrompt)
        );
        assert_eq!(
            transition(ReviewAction::SwitchModel),
            Transition::Regenerate(Regenerate::NewModel)
        );
        assert_eq!(
            transition(ReviewAction::Refine),
            Transition::Regenerate(Regenerate::WithRefinement)
        );
        assert_eq!(
            transition(ReviewAction::ShowPrompt),
            Transition::Stay(Notice::ShowPrompt)
        );
        assert_eq!(
            transition(ReviewAction::Help),
            Transition::Stay(Notice::Help)
        );
    }

    #[test]
    fn test_state_starts_with_diff_in_prompt() {
        let state = WorkflowState::new("llama3".to_string(), "+foo");
        assert!(state.prompt.contains("+foo"));
        assert!(state.message.is_none());
        assert_eq!(state.model, "llama3");
    }

    #[test]
    fn test_push_refinement_rebuilds_prompt() {
        let mut state = WorkflowState::new("llama3".to_string(), "+foo");
        state.push_refinement("mention the author", "+foo");

        let refinement_pos = state.prompt.find("mention the author").unwrap();
        let diff_pos = state.prompt.find("+foo").unwrap();
        assert!(refinement_pos < diff_pos);
    }

    #[test]
    fn test_refinements_accumulate() {
        let mut state = WorkflowState::new("llama3".to_string(), "+foo");
        state.push_refinement("first instruction", "+foo");
        state.push_refinement("second instruction", "+foo");

        assert_eq!(state.refinement, "first instruction\nsecond instruction");
        assert!(state.prompt.contains("first instruction"));
        assert!(state.prompt.contains("second instruction"));
        // Model survives prompt rebuilds
        assert_eq!(state.model, "llama3");
    }
}
