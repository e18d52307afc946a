use std::fmt::Write;

use lazy_core::{RunPlan, ToolCommand};

/// Human readable description of what `run` would do
pub fn format_plan(plan: &RunPlan) -> String {
    let mut out = String::new();

    writeln!(out, "📄 Source: {}", plan.located.file_path.display()).ok();
    writeln!(out, "📂 Project root: {}", plan.root().display()).ok();
    writeln!(out, "📦 Artifact: {}", plan.artifact.output_path.display()).ok();

    match plan.compile {
        Some(ref compile) => {
            writeln!(out, "🔨 Compile: {}", compile.to_shell_command()).ok();
        }
        None => {
            writeln!(out, "✅ Already compiled").ok();
        }
    }
    writeln!(out, "🚀 Run: {}", plan.run.to_shell_command()).ok();

    write_context(&mut out, &plan.run);
    out
}

fn write_context(out: &mut String, command: &ToolCommand) {
    if let Some(dir) = command.working_dir() {
        writeln!(out, "Working directory: {}", dir.display()).ok();
    }
    if !command.env.is_empty() {
        writeln!(out, "Environment variables:").ok();
        for (key, value) in &command.env {
            writeln!(out, "  {}={}", key, value.to_string_lossy()).ok();
        }
    }
}

pub fn print_plan(plan: &RunPlan) {
    print!("{}", format_plan(plan));
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_core::{Config, HostOs, ProjectPathResolver};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_uncompiled_plan() {
        let home = TempDir::new().unwrap();
        let root = home.path().join("Documents").join("c_projects");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("hello.c"), "").unwrap();

        let runner = lazy_core::BuildRunner::with_resolver(
            ProjectPathResolver::new(home.path(), HostOs::Unix),
            &Config::default(),
        );
        let plan = runner.plan("hello.c").unwrap();
        let text = format_plan(&plan);

        assert!(text.contains("🔨 Compile: gcc hello.c -o hello.o"));
        assert!(text.contains("hello.o"));
        assert!(text.contains("PROJECT=hello.c"));
        assert!(!text.contains("Already compiled"));
    }
}
