//! Main runner that coordinates lookup, compilation and execution

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    build::{ArtifactTracker, CancelToken, Toolchains, WaitPolicy},
    command::ToolCommand,
    config::Config,
    error::{Error, Result},
    project::{FileLocator, ProjectPathResolver},
    types::{CompiledArtifact, Located, SourceFile},
};

/// Environment variable carrying the project root to child processes
pub const PROJECT_PATH_VAR: &str = "PROJECT_PATH";
/// Environment variable carrying the source file name to child processes
pub const PROJECT_VAR: &str = "PROJECT";

/// Stages a run goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuildState {
    Located,
    NotCompiled,
    AlreadyCompiled,
    Compiling,
    WaitingForArtifact,
    Ready,
    Executing,
    Done,
}

/// Everything a run will do, resolved up front
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub source: SourceFile,
    pub located: Located,
    pub artifact: CompiledArtifact,
    pub compile: Option<ToolCommand>,
    pub run: ToolCommand,
}

impl RunPlan {
    pub fn already_compiled(&self) -> bool {
        self.compile.is_none()
    }

    pub fn root(&self) -> &std::path::Path {
        &self.located.root_path
    }
}

/// What a finished run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub artifact: PathBuf,
    /// Time spent waiting for the compiler, if one ran
    pub compile_time: Option<Duration>,
}

pub struct BuildRunner {
    resolver: ProjectPathResolver,
    toolchains: Toolchains,
    wait: WaitPolicy,
    env: Vec<(String, OsString)>,
    cancel: CancelToken,
}

impl BuildRunner {
    /// Runner for the current user, honouring `projects_home` from the config
    pub fn new(config: &Config) -> Result<Self> {
        let resolver = ProjectPathResolver::from_config(config)?;
        Ok(Self::with_resolver(resolver, config))
    }

    pub fn with_resolver(resolver: ProjectPathResolver, config: &Config) -> Self {
        Self {
            resolver,
            toolchains: Toolchains::from_config(config),
            wait: WaitPolicy::from(&config.wait),
            env: config
                .env
                .iter()
                .map(|(k, v)| (k.clone(), OsString::from(v)))
                .collect(),
            cancel: CancelToken::new(),
        }
    }

    pub fn with_wait_policy(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }

    pub fn resolver(&self) -> &ProjectPathResolver {
        &self.resolver
    }

    /// Handle that aborts a pending artifact wait from elsewhere
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Locate `file_name` and decide whether it needs compiling. Nothing is
    /// spawned or written.
    pub fn plan(&self, file_name: &str) -> Result<RunPlan> {
        let source = SourceFile::parse(file_name)?;

        let located = FileLocator::new(&self.resolver)
            .search(&source)?
            .ok_or_else(|| Error::NotFound(file_name.to_string()))?;
        transition(BuildState::Located, &source);

        let tracker = ArtifactTracker::new(&located.root_path);
        let (compiled, artifact) = tracker.is_compiled(&source)?;

        let env = self.child_env(&source, &located);
        let compile = if compiled {
            transition(BuildState::AlreadyCompiled, &source);
            None
        } else {
            transition(BuildState::NotCompiled, &source);
            let cmd = self
                .toolchains
                .compile_command(&source, &located, &artifact)?
                .with_envs(env.clone());
            Some(cmd)
        };

        let run = ToolCommand::new_run(artifact.output_path.as_os_str())
            .with_working_dir(&located.root_path)
            .with_envs(env);

        Ok(RunPlan {
            source,
            located,
            artifact,
            compile,
            run,
        })
    }

    /// Start the compiler if the plan needs one and wait for its artifact.
    /// Returns the time spent waiting.
    pub fn compile(&self, plan: &RunPlan) -> Result<Option<Duration>> {
        let Some(ref compile) = plan.compile else {
            transition(BuildState::Ready, &plan.source);
            return Ok(None);
        };

        transition(BuildState::Compiling, &plan.source);
        let command = compile.to_shell_command();
        let mut child = compile.spawn().map_err(|source| Error::CompileInvocation {
            command: command.clone(),
            source,
        })?;

        transition(BuildState::WaitingForArtifact, &plan.source);
        let elapsed = self.wait.wait_for(
            &plan.artifact.output_path,
            &self.cancel,
            Some((&mut child, command.as_str())),
        )?;

        info!("Compiled {} in {:?}", plan.source, elapsed);
        transition(BuildState::Ready, &plan.source);
        Ok(Some(elapsed))
    }

    /// Execute the artifact with the terminal's streams and block until it exits
    pub fn launch(&self, plan: &RunPlan) -> Result<()> {
        transition(BuildState::Executing, &plan.source);
        let artifact = &plan.artifact.output_path;

        let status = plan.run.status().map_err(|e| Error::Execution {
            artifact: artifact.clone(),
            reason: e.to_string(),
        })?;

        if !status.success() {
            return Err(Error::Execution {
                artifact: artifact.clone(),
                reason: format!("process exited with {status}"),
            });
        }

        transition(BuildState::Done, &plan.source);
        Ok(())
    }

    pub fn execute(&self, plan: &RunPlan) -> Result<RunReport> {
        let compile_time = self.compile(plan)?;
        self.launch(plan)?;
        Ok(RunReport {
            artifact: plan.artifact.output_path.clone(),
            compile_time,
        })
    }

    /// Locate, compile when needed, and execute `file_name`
    pub fn run(&self, file_name: &str) -> Result<RunReport> {
        let plan = self.plan(file_name)?;
        self.execute(&plan)
    }

    fn child_env(&self, source: &SourceFile, located: &Located) -> Vec<(String, OsString)> {
        let mut env = vec![
            (
                PROJECT_PATH_VAR.to_string(),
                located.root_path.clone().into_os_string(),
            ),
            (PROJECT_VAR.to_string(), OsString::from(source.name())),
        ];
        env.extend(self.env.iter().cloned());
        env
    }
}

fn transition(state: BuildState, source: &SourceFile) {
    debug!("{}: {:?}", source, state);
}
