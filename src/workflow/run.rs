use crate::error::{AppError, AppResult};
use crate::git::repository::{Repository, StagingGuard};
use crate::llm::client::ModelClient;
use crate::workflow::dispatch::compose_message;
use crate::workflow::state::{Notice, Regenerate, Transition, WorkflowState, transition};
use crate::workflow::ui::ReviewUi;
use tracing::{debug, info};

/// Flags controlling one workflow invocation
#[derive(Debug, Clone, Default)]
pub struct WorkflowOptions {
    /// Stage interactively via `git add --patch` instead of staging everything
    pub patch: bool,
    /// Mark the commit as work-in-progress and skip CI
    pub wip: bool,
    /// Write the message to the lazygit hand-off file instead of committing
    pub handoff: bool,
    /// Model to use; when unset the user picks one interactively
    pub model: Option<String>,
}

/// How the invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Committed,
    HandedOff,
    Aborted,
}

/// Run the full generate-and-confirm workflow against `repo`.
///
/// Stages changes, derives the staged diff, then loops: generate a message,
/// review it, and dispatch on acceptance. The index is restored on every exit
/// path except a lazygit hand-off, where the consuming tool owns staging.
pub async fn run_workflow(
    repo: &Repository,
    client: &dyn ModelClient,
    ui: &mut dyn ReviewUi,
    options: &WorkflowOptions,
) -> AppResult<WorkflowOutcome> {
    if !repo.has_pending_changes()? {
        return Err(AppError::NoChanges);
    }

    let mut guard = StagingGuard::new(repo);

    repo.register_intent_to_add()?;
    if options.patch {
        repo.stage_interactive()?;
    } else {
        repo.stage_all()?;
    }

    let diff = repo.staged_diff()?;
    debug!(diff_len = diff.len(), "extracted staged diff");

    let model = match &options.model {
        Some(m) => m.clone(),
        None => select_model(client, ui).await?,
    };

    let mut state = WorkflowState::new(model, &diff);

    'generate: loop {
        let message = client.draft(&state.model, &state.prompt).await?;
        ui.show_message(&message, &state.model);
        state.message = Some(message);

        // Reviewing: the only state that reads user input
        loop {
            let action = ui.review_action()?;
            match transition(action) {
                Transition::Commit { amend } => {
                    let Some(message) = state.message.as_ref() else {
                        // Reviewing is only entered after a successful generation
                        continue 'generate;
                    };
                    let body = compose_message(message, &state.model, options.wip);

                    if options.handoff {
                        repo.write_pending_commit(&body)?;
                        // lazygit owns the staging lifecycle from here
                        guard.disarm();
                        info!("message handed off to lazygit");
                        return Ok(WorkflowOutcome::HandedOff);
                    }

                    repo.commit(&body)?;
                    info!(model = %state.model, "commit created");
                    if amend {
                        repo.amend_interactive()?;
                    }
                    return Ok(WorkflowOutcome::Committed);
                }
                Transition::Abort => return Ok(WorkflowOutcome::Aborted),
                Transition::Regenerate(Regenerate::SamePrompt) => continue 'generate,
                Transition::Regenerate(Regenerate::NewModel) => {
                    state.model = select_model(client, ui).await?;
                    continue 'generate;
                }
                Transition::Regenerate(Regenerate::WithRefinement) => {
                    let text = ui.refinement_text()?;
                    state.push_refinement(&text, &diff);
                    continue 'generate;
                }
                Transition::Stay(Notice::ShowPrompt) => ui.show_prompt_text(&state.prompt)?,
                Transition::Stay(Notice::Help) => ui.show_help(),
            }
        }
    }
}

async fn select_model(client: &dyn ModelClient, ui: &mut dyn ReviewUi) -> AppResult<String> {
    let models = client.list_models().await?;
    Ok(ui.choose_model(&models)?)
}
