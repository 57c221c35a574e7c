/// Fixed directive sent ahead of every diff
const DIRECTIVE: &str = "Write a commit title and a commit description for the changes below.\n\
If the changes are unrelated to each other, use a generic title such as \"Multiple changes\".\n\
Leave the description empty if it would add no information beyond the title.";

/// Build the instruction string sent to the model.
///
/// Order is fixed: the directive, any accumulated user refinement verbatim,
/// then the full diff. The diff is never truncated or summarized.
pub fn build_prompt(refinement: &str, diff: &str) -> String {
    let mut prompt = String::from(DIRECTIVE);

    if !refinement.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(refinement);
    }

    prompt.push_str("\n\nChanges:\n");
    prompt.push_str(diff);
    prompt
}
