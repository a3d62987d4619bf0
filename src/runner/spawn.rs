use std::process::Stdio;

use tokio::process::{Child, Command};

use crate::error::RunnerError;

/// Builds and spawns the child. Stdout and stderr are piped so the runner
/// can intercept them; stdin stays attached to the terminal.
pub fn spawn(command: &[String], shell: bool) -> Result<Child, RunnerError> {
    let mut cmd = build_command(command, shell)?;
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    cmd.spawn().map_err(|e| RunnerError::Spawn(e.to_string()))
}

fn build_command(command: &[String], shell: bool) -> Result<Command, RunnerError> {
    let (exe, rest) = command.split_first().ok_or(RunnerError::EmptyCommand)?;

    if shell {
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C");
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c");
            c
        };
        cmd.arg(command.join(" "));
        Ok(cmd)
    } else {
        let mut cmd = Command::new(exe);
        cmd.args(rest);
        Ok(cmd)
    }
}
