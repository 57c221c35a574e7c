use crate::error::{GitError, GitResult};
use crate::git::executor::GitExecutor;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File consumed by lazygit's pending-commit integration
pub const HANDOFF_FILE: &str = "LAZYGIT_PENDING_COMMIT";

/// Represents a git repository and provides the staging/diff/commit
/// operations the workflow needs
#[derive(Debug)]
pub struct Repository {
    path: PathBuf,
    executor: GitExecutor,
}

impl Repository {
    /// Open the repository containing the current working directory
    pub fn discover() -> GitResult<Self> {
        let current_dir = env::current_dir().map_err(GitError::IoError)?;
        Self::open(&current_dir)
    }

    /// Open the repository containing `dir`, resolving the worktree root
    /// through git itself
    pub fn open<P: AsRef<Path>>(dir: P) -> GitResult<Self> {
        let probe = GitExecutor::new(dir.as_ref());
        let output = probe
            .run(&["rev-parse", "--show-toplevel"])
            .map_err(|_| GitError::NotARepository)?;

        let root = PathBuf::from(output.stdout.trim());
        Ok(Self::new(root))
    }

    /// Create a Repository for a known worktree root
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let executor = GitExecutor::new(&path);

        Self { path, executor }
    }

    /// Get the worktree root path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the metadata directory (`.git`, or the real location for
    /// worktrees and submodules)
    pub fn git_dir(&self) -> GitResult<PathBuf> {
        let output = self.executor.run(&["rev-parse", "--absolute-git-dir"])?;
        Ok(PathBuf::from(output.stdout.trim()))
    }

    /// Check whether the working tree has anything to commit: tracked
    /// modifications, deletions, or untracked files
    pub fn has_pending_changes(&self) -> GitResult<bool> {
        let output = self.executor.run(&["status", "--porcelain"])?;
        Ok(!output.stdout.trim().is_empty())
    }

    /// List untracked paths (excluding ignored files)
    ///
    /// NUL-delimited output so paths come back raw; line-based output would
    /// be C-quoted for non-ASCII names under the default core.quotePath.
    pub fn untracked_files(&self) -> GitResult<Vec<String>> {
        let output = self
            .executor
            .run(&["ls-files", "-z", "--others", "--exclude-standard"])?;

        Ok(output
            .stdout
            .split('\0')
            .filter(|path| !path.is_empty())
            .map(|path| path.to_string())
            .collect())
    }

    /// Register untracked files with the index without staging their content,
    /// so they show up in the staged diff as additions
    pub fn register_intent_to_add(&self) -> GitResult<()> {
        let untracked = self.untracked_files()?;
        if untracked.is_empty() {
            return Ok(());
        }

        debug!(count = untracked.len(), "registering intent-to-add");
        let mut args = vec!["add", "--intent-to-add", "--"];
        args.extend(untracked.iter().map(String::as_str));
        self.executor.run(&args)?;
        Ok(())
    }

    /// Stage every pending change
    pub fn stage_all(&self) -> GitResult<()> {
        self.executor.run(&["add", "--all"])?;
        Ok(())
    }

    /// Hand control to git's interactive patch-staging UI; blocks until the
    /// user exits it
    pub fn stage_interactive(&self) -> GitResult<()> {
        self.executor.run_interactive(&["add", "--patch"])
    }

    /// Full unified diff of staged content, with extended context so the
    /// model sees surrounding unchanged code. Never truncated.
    pub fn staged_diff(&self) -> GitResult<String> {
        let output = self.executor.run(&["diff", "--cached", "-U10"])?;
        Ok(output.stdout)
    }

    /// Unstage everything, restoring the index to HEAD
    ///
    /// Note this is not a snapshot restore: content the user had staged
    /// before the invocation is unstaged too (its working-tree changes are
    /// untouched).
    pub fn reset_index(&self) -> GitResult<()> {
        self.executor.run(&["reset", "-q"])?;
        Ok(())
    }

    /// Create a commit from the staged index with `body` as the full,
    /// multi-line commit message
    pub fn commit(&self, body: &str) -> GitResult<()> {
        self.executor.run_with_input(&["commit", "-F", "-"], body)?;
        Ok(())
    }

    /// Open git's interactive amend UI for the most recent commit
    pub fn amend_interactive(&self) -> GitResult<()> {
        self.executor.run_interactive(&["commit", "--amend"])
    }

    /// Overwrite the lazygit hand-off file with the composed message body
    pub fn write_pending_commit(&self, body: &str) -> GitResult<()> {
        let path = self.git_dir()?.join(HANDOFF_FILE);
        fs::write(&path, body)?;
        debug!(path = %path.display(), "wrote pending commit file");
        Ok(())
    }

    /// Get the git executor for this repository
    pub fn executor(&self) -> &GitExecutor {
        &self.executor
    }
}

/// Resets the index when dropped, unless disarmed.
///
/// The index is the one shared mutable resource of an invocation; this guard
/// is the release half of its acquisition. Hand-off mode disarms it because
/// the consuming tool owns the staging lifecycle from that point on.
#[derive(Debug)]
pub struct StagingGuard<'a> {
    repo: &'a Repository,
    armed: bool,
}

impl<'a> StagingGuard<'a> {
    pub fn new(repo: &'a Repository) -> Self {
        Self { repo, armed: true }
    }

    /// Leave the index as-is on drop
    pub fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for StagingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = self.repo.reset_index() {
            warn!(error = %e, "failed to reset index");
        }
    }
}
