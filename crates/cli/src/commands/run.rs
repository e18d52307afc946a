use std::time::Duration;

use anyhow::{Context, Result};
use lazy_core::{BuildRunner, Config, WaitPolicy};
use tracing::debug;

use crate::display::print_plan;

const RUN_EXAMPLE: &str = "lazy run myproject.c";

pub fn run_command(config: &Config, file: &str, dry_run: bool, timeout: Option<u64>) -> Result<()> {
    debug!("Running file: {}", file);

    let mut runner = BuildRunner::new(config).context("Failed to set up the runner")?;
    if let Some(secs) = timeout {
        let policy = WaitPolicy::from(&config.wait).with_timeout(Duration::from_secs(secs));
        runner = runner.with_wait_policy(policy);
    }

    let plan = match runner.plan(file) {
        Ok(plan) => plan,
        Err(err) if err.is_recoverable() => {
            println!("{}", err.user_message(RUN_EXAMPLE));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if dry_run {
        print_plan(&plan);
        return Ok(());
    }

    let file_path = plan.located.file_path.display();
    if runner
        .compile(&plan)
        .with_context(|| format!("Could not compile file {}", file_path))?
        .is_some()
    {
        println!(
            "File {} compiled. Output located in {}",
            plan.source,
            plan.root().display()
        );
    }

    runner
        .launch(&plan)
        .with_context(|| format!("Could not run file {}", file_path))
}
