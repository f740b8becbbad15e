//! Subprocess execution with live output relaying
//!
//! The child gets the parent's stdin. Its stdout and stderr are piped and
//! copied to the parent's streams by two tasks running next to the wait, so
//! output shows up as it is produced.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;
use tokio::task::{JoinError, JoinHandle};

use crate::error::VgpError;
use crate::utils::terminal;

/// A single delegated invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateCall {
    /// Program name or path
    pub program: String,
    /// Arguments, without the program name
    pub args: Vec<String>,
    /// Working directory of the child
    pub cwd: Option<PathBuf>,
    /// Extra environment for the child, on top of the inherited one
    pub envs: Vec<(String, String)>,
}

impl DelegateCall {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: None,
            envs: Vec::new(),
        }
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Run the call to completion, relaying all output
    pub fn run(&self, verbose: bool) -> Result<(), VgpError> {
        if verbose {
            terminal::print_command(&self.program, &self.args);
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| VgpError::spawn_failed(&self.program, &self.args, e))?;

        runtime.block_on(self.stream())
    }

    async fn stream(&self) -> Result<(), VgpError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| VgpError::spawn_failed(&self.program, &self.args, e))?;

        let stdout_relay = child
            .stdout
            .take()
            .map(|out| relay(out, tokio::io::stdout()));
        let stderr_relay = child
            .stderr
            .take()
            .map(|err| relay(err, tokio::io::stderr()));

        let status = child
            .wait()
            .await
            .map_err(|e| VgpError::spawn_failed(&self.program, &self.args, e))?;

        // Relays run to EOF, not to the child's exit: output written just
        // before exiting is kept, and a background grandchild that inherited
        // the pipes holds vgp open until it closes them too.
        for task in [stdout_relay, stderr_relay].into_iter().flatten() {
            if let Some(warning) = relay_warning(&self.program, task.await) {
                terminal::print_warning(&warning);
            }
        }

        if status.success() {
            Ok(())
        } else {
            Err(VgpError::delegation_failed(
                &self.program,
                &self.args,
                status.code(),
            ))
        }
    }
}

fn relay<R, W>(mut reader: R, mut writer: W) -> JoinHandle<std::io::Result<u64>>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let copied = tokio::io::copy(&mut reader, &mut writer).await?;
        writer.flush().await?;
        Ok(copied)
    })
}

fn relay_warning(
    program: &str,
    outcome: Result<std::io::Result<u64>, JoinError>,
) -> Option<String> {
    match outcome {
        Ok(Ok(_)) => None,
        Ok(Err(e)) => Some(format!("Could not relay output of `{}`: {}", program, e)),
        Err(e) => Some(format!("Output relay for `{}` stopped: {}", program, e)),
    }
}

/// Sequence of delegate calls that stops at the first failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<DelegateCall>,
}

impl Pipeline {
    pub fn new(stages: Vec<DelegateCall>) -> Self {
        Self { stages }
    }

    #[cfg(test)]
    pub fn stages(&self) -> &[DelegateCall] {
        &self.stages
    }

    /// Run every stage with `runner`, returning the first error
    pub fn run_with<F>(&self, mut runner: F) -> Result<(), VgpError>
    where
        F: FnMut(&DelegateCall) -> Result<(), VgpError>,
    {
        for stage in &self.stages {
            runner(stage)?;
        }
        Ok(())
    }

    pub fn run(&self, verbose: bool) -> Result<(), VgpError> {
        self.run_with(|stage| stage.run(verbose))
    }
}
