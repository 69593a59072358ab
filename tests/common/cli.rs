use assert_cmd::Command;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;
use tempfile::TempDir;

/// Scratch directory that acts as the working directory for `tk`.
pub struct TkWorkspace {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl TkWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join("tickets.db")
    }
}

pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Build a `tk` command rooted in the workspace with a clean environment.
pub fn tk_command(workspace: &TkWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tk"));
    cmd.current_dir(&workspace.root)
        .env_remove("TICKETS_DB")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_tk<I, S>(workspace: &TkWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = tk_command(workspace)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run tk: {e}"));
    CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Pull the ids out of `list-tickets` text output.
pub fn listed_ids(stdout: &str) -> Vec<i64> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix("ID: "))
        .filter_map(|rest| rest.split(',').next())
        .filter_map(|id| id.parse().ok())
        .collect()
}
