use crate::llm::client::CommitMessage;

/// Prefix added to the title of work-in-progress commits
pub const WIP_PREFIX: &str = "WIP: ";

/// Trailer appended to work-in-progress commits so CI skips them
pub const SKIP_CI_TRAILER: &str = "[skip ci]";

/// Compose the final commit message body from an accepted message.
///
/// Layout: title, blank line, description, blank line, attribution footer
/// naming the model. Blank-line separation is kept even when the description
/// is empty. Work-in-progress mode prefixes the title and appends the CI-skip
/// trailer.
pub fn compose_message(message: &CommitMessage, model: &str, wip: bool) -> String {
    let title = if wip {
        format!("{}{}", WIP_PREFIX, message.title)
    } else {
        message.title.clone()
    };

    let mut body = format!(
        "{}\n\n{}\n\nCommit message by {}",
        title, message.description, model
    );

    if wip {
        body.push('\n');
        body.push_str(SKIP_CI_TRAILER);
    }

    body
}
