//! Workspace maintenance commands for pgrange.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Project maintenance tasks")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Run formatting and clippy fixes.
    Tidy,
    /// Run the test suite via nextest, then the doc tests.
    Test,
    /// Run the literal parsing benchmarks.
    Bench {
        /// Only run benchmarks whose name contains this filter.
        filter: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = workspace_root()?;

    match cli.command {
        Task::Tidy => tidy(&root),
        Task::Test => test(&root),
        Task::Bench { filter } => bench(&root, filter.as_deref()),
    }
}

/// The workspace root is two levels above this crate's manifest.
fn workspace_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let root = manifest_dir
        .ancestors()
        .nth(2)
        .context("xtask must live under crates/ in the workspace root")?;
    Ok(root.to_path_buf())
}

fn cargo(root: &Path) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.current_dir(root);
    cmd
}

fn tidy(root: &Path) -> Result<()> {
    run(cargo(root).args(["fmt", "--all"]))?;
    run(cargo(root).args([
        "clippy",
        "-q",
        "--fix",
        "--workspace",
        "--all-targets",
        "--allow-dirty",
    ]))
}

fn test(root: &Path) -> Result<()> {
    run(cargo(root).args(["nextest", "run", "--workspace"]))?;
    // nextest does not run doc tests.
    run(cargo(root).args(["test", "--doc", "--workspace"]))
}

fn bench(root: &Path, filter: Option<&str>) -> Result<()> {
    let mut cmd = cargo(root);
    cmd.args(["bench", "-p", "pgrange", "--bench", "benchmark"]);
    if let Some(filter) = filter {
        cmd.args(["--", filter]);
    }
    run(&mut cmd)
}

/// Execute a command and surface failures with context.
fn run(cmd: &mut Command) -> Result<()> {
    let rendered = render_command(cmd);
    println!("Running: {rendered}");

    let status = cmd
        .status()
        .with_context(|| format!("failed to run {rendered}"))?;

    if !status.success() {
        bail!("command failed: {rendered}");
    }

    Ok(())
}

/// Render a command as a printable string.
fn render_command(cmd: &Command) -> String {
    let mut rendered = cmd.get_program().to_string_lossy().to_string();
    for arg in cmd.get_args() {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }
    rendered
}
