use crate::llm::client::CommitMessage;
use crate::workflow::state::ReviewAction;
use dialoguer::{Input, Select};
use std::io;

/// Terminal interaction needed by the review loop.
///
/// A trait so the loop can be driven by scripted input in tests.
pub trait ReviewUi {
    /// Display a freshly generated message for review
    fn show_message(&mut self, message: &CommitMessage, model: &str);

    /// Read the next review action
    fn review_action(&mut self) -> io::Result<ReviewAction>;

    /// Read additional free-text instructions for the model
    fn refinement_text(&mut self) -> io::Result<String>;

    /// Let the user pick one of the available models
    fn choose_model(&mut self, models: &[String]) -> io::Result<String>;

    /// Print the current prompt, then wait for an acknowledgement
    fn show_prompt_text(&mut self, prompt: &str) -> io::Result<()>;

    /// Print the action legend
    fn show_help(&mut self);
}

/// Interactive terminal implementation backed by dialoguer
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl ReviewUi for ConsoleUi {
    fn show_message(&mut self, message: &CommitMessage, model: &str) {
        println!("\nProposed commit message ({}):\n", model);
        println!("  {}", message.title);
        if !message.description.is_empty() {
            println!();
            for line in message.description.lines() {
                println!("  {}", line);
            }
        }
        println!();
    }

    fn review_action(&mut self) -> io::Result<ReviewAction> {
        let input: String = Input::new()
            .with_prompt("Accept? [Enter=yes, h=help]")
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)?;

        Ok(ReviewAction::parse(&input))
    }

    fn refinement_text(&mut self) -> io::Result<String> {
        Input::new()
            .with_prompt("Additional instructions")
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }

    fn choose_model(&mut self, models: &[String]) -> io::Result<String> {
        let index = Select::new()
            .with_prompt("Select a model")
            .items(models)
            .default(0)
            .interact()
            .map_err(io::Error::other)?;

        Ok(models[index].clone())
    }

    fn show_prompt_text(&mut self, prompt: &str) -> io::Result<()> {
        println!("\n{}\n", prompt);
        let _: String = Input::new()
            .with_prompt("Press Enter to continue")
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)?;
        Ok(())
    }

    fn show_help(&mut self) {
        println!("\n{}\n", ReviewAction::legend());
    }
}
