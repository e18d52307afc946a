use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    command::ToolCommand,
    config::{Config, ToolchainConfig},
    error::{Error, Result},
    types::{CompiledArtifact, Located, SourceFile},
};

const SOURCE_PLACEHOLDER: &str = "{source}";
const OUTPUT_PLACEHOLDER: &str = "{output}";

/// Compile commands by extension token
#[derive(Debug, Clone)]
pub struct Toolchains {
    by_extension: BTreeMap<String, ToolchainConfig>,
}

impl Default for Toolchains {
    fn default() -> Self {
        let mut by_extension = BTreeMap::new();
        let c_like = ["{source}", "-o", "{output}"];

        by_extension.insert("c".to_string(), ToolchainConfig::new("gcc", &c_like));
        for ext in ["cpp", "cc", "cxx"] {
            by_extension.insert(ext.to_string(), ToolchainConfig::new("g++", &c_like));
        }
        by_extension.insert("rs".to_string(), ToolchainConfig::new("rustc", &c_like));
        by_extension.insert(
            "go".to_string(),
            ToolchainConfig::new("go", &["build", "-o", "{output}", "{source}"]),
        );

        Self { by_extension }
    }
}

impl Toolchains {
    /// Built-ins with the config's entries layered on top
    pub fn from_config(config: &Config) -> Self {
        let mut toolchains = Self::default();
        for (ext, toolchain) in &config.toolchains {
            debug!("Toolchain override for .{}: {}", ext, toolchain.command);
            toolchains.by_extension.insert(ext.clone(), toolchain.clone());
        }
        toolchains
    }

    pub fn get(&self, extension: &str) -> Option<&ToolchainConfig> {
        self.by_extension.get(extension)
    }

    /// Compile command for `source`, run from the project root
    pub fn compile_command(
        &self,
        source: &SourceFile,
        located: &Located,
        artifact: &CompiledArtifact,
    ) -> Result<ToolCommand> {
        let toolchain = self
            .get(source.extension())
            .ok_or_else(|| Error::NoToolchain(source.extension().to_string()))?;

        let source_arg = located.relative_path().to_string_lossy().into_owned();
        let output_arg = artifact.file_name();
        let args = toolchain
            .args
            .iter()
            .map(|arg| {
                arg.replace(SOURCE_PLACEHOLDER, &source_arg)
                    .replace(OUTPUT_PLACEHOLDER, &output_arg)
            })
            .collect();

        Ok(ToolCommand::new_compile(toolchain.command.clone(), args)
            .with_working_dir(&located.root_path))
    }
}
