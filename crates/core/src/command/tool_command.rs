use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Compile,
    Run,
}

/// A child process to launch. Working directory and environment travel
/// with the command; nothing here touches the current process.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    pub kind: CommandKind,
    pub program: OsString,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, OsString)>,
}

impl ToolCommand {
    pub fn new_compile(program: impl Into<OsString>, args: Vec<String>) -> Self {
        Self {
            kind: CommandKind::Compile,
            program: program.into(),
            args,
            working_dir: None,
            env: Vec::new(),
        }
    }

    pub fn new_run(program: impl Into<OsString>) -> Self {
        Self {
            kind: CommandKind::Run,
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            env: Vec::new(),
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn with_envs<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, OsString)>,
    {
        self.env.extend(vars);
        self
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = quote(&self.program.to_string_lossy());
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        cmd
    }

    fn build(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd
    }

    /// Start the process without waiting for it. Output goes to the
    /// inherited streams.
    pub fn spawn(&self) -> io::Result<Child> {
        info!("Spawning: {}", self.to_shell_command());
        self.build().stdin(Stdio::null()).spawn()
    }

    /// Run to completion with stdin, stdout and stderr forwarded 1:1
    pub fn status(&self) -> io::Result<ExitStatus> {
        info!("Running: {}", self.to_shell_command());
        self.build()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }
}

fn quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}
