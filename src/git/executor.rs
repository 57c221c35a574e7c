use crate::error::{GitError, GitResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Result of executing a git command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Executes git commands within a repository
#[derive(Debug)]
pub struct GitExecutor {
    repo_path: PathBuf,
}

impl GitExecutor {
    /// Create a new GitExecutor for the given repository path
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Run a git command and capture its output
    ///
    /// Args should not include the "git" prefix.
    /// Example: executor.run(&["status", "--porcelain"])
    pub fn run(&self, args: &[&str]) -> GitResult<CommandOutput> {
        if args.is_empty() {
            return Err(GitError::CommandFailed("Empty command".to_string()));
        }

        debug!(command = ?args, "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| GitError::CommandFailed(format!("Failed to execute git: {}", e)))?;

        self.process_output(output, args)
    }

    /// Run a git command, feeding `input` to its stdin
    ///
    /// Used for `commit -F -` so multi-line message bodies survive verbatim.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> GitResult<CommandOutput> {
        debug!(command = ?args, "running git with stdin");
        let mut child = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| GitError::CommandFailed(format!("Failed to execute git: {}", e)))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(input.as_bytes())?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| GitError::CommandFailed(format!("Failed to wait for git: {}", e)))?;

        self.process_output(output, args)
    }

    /// Run a git command that inherits the terminal
    ///
    /// Used for `add --patch` and `commit --amend`, which open the tool's own
    /// interactive UI. Blocks until the user exits it.
    pub fn run_interactive(&self, args: &[&str]) -> GitResult<()> {
        debug!(command = ?args, "running interactive git");
        let status = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| GitError::CommandFailed(format!("Failed to execute git: {}", e)))?;

        if !status.success() {
            return Err(GitError::CommandFailed(format!(
                "Command 'git {}' failed with exit code {}",
                args.join(" "),
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }

    /// Process command output into CommandOutput struct
    fn process_output(&self, output: Output, args: &[&str]) -> GitResult<CommandOutput> {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);
        let success = output.status.success();

        let cmd_output = CommandOutput {
            stdout,
            stderr: stderr.clone(),
            exit_code,
            success,
        };

        // Return error for failed commands
        if !success {
            return Err(GitError::CommandFailed(format!(
                "Command 'git {}' failed with exit code {}: {}",
                args.join(" "),
                exit_code,
                stderr.trim()
            )));
        }

        Ok(cmd_output)
    }

    /// Get the repository path
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let repo_path = temp_dir.path().to_path_buf();

        // Initialize git repo
        Command::new("git")
            .args(["init"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        // Configure git
        Command::new("git")
            .args(["config", "user.name", "Test User"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        Command::new("git")
            .args(["config", "user.email", "test@example.com"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        (temp_dir, repo_path)
    }

    #[test]
    fn test_run_status() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        let result = executor.run(&["status", "--porcelain"]);
        assert!(result.is_ok());

        let output = result.unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, 0);
    }

    #[test]
    fn test_run_log_empty_repo() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        // Log command should fail in empty repo
        let result = executor.run(&["log", "--oneline"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_command() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        let result = executor.run(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_with_input_preserves_newlines() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        std::fs::write(repo_path.join("a.txt"), "content").unwrap();
        executor.run(&["add", "a.txt"]).unwrap();

        let body = "Title\n\nParagraph one.\n\nParagraph two.";
        executor.run_with_input(&["commit", "-F", "-"], body).unwrap();

        let log = executor.run(&["log", "-1", "--format=%B"]).unwrap();
        assert_eq!(log.stdout.trim_end(), body);
    }

    #[test]
    fn test_repo_path() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        assert_eq!(executor.repo_path(), repo_path.as_path());
    }
}
