use clap::Parser;
use std::path::PathBuf;

/// Draft git commit messages with a local language model
#[derive(Debug, Parser)]
#[command(name = "gitmuse", version)]
pub struct Cli {
    /// Directory to operate in (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Pick changes to stage interactively (git add --patch)
    #[arg(short, long)]
    pub patch: bool,

    /// Mark the commit as work-in-progress and skip CI
    #[arg(short, long)]
    pub wip: bool,

    /// Write the message to .git/LAZYGIT_PENDING_COMMIT instead of committing
    #[arg(long)]
    pub lazygit: bool,

    /// Model to use (skips the interactive model selection)
    #[arg(short, long)]
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["gitmuse"]);
        assert!(cli.path.is_none());
        assert!(!cli.patch);
        assert!(!cli.wip);
        assert!(!cli.lazygit);
        assert!(cli.model.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "gitmuse", "--patch", "--wip", "--lazygit", "--model", "llama3", "/some/repo",
        ]);
        assert_eq!(cli.path.as_deref(), Some(std::path::Path::new("/some/repo")));
        assert!(cli.patch);
        assert!(cli.wip);
        assert!(cli.lazygit);
        assert_eq!(cli.model.as_deref(), Some("llama3"));
    }
}
