use anyhow::{Context, Result};
use lazy_core::{Config, CreateOutcome, ProjectCreator, ProjectPathResolver, SourceFile};

const CREATE_EXAMPLE: &str = "lazy create myproject.go";

pub fn create_command(config: &Config, files: &[String]) -> Result<()> {
    let resolver = ProjectPathResolver::from_config(config)
        .context("Failed to resolve project directories")?;
    let creator = ProjectCreator::new(&resolver);

    for name in files {
        let source = match SourceFile::parse(name) {
            Ok(source) => source,
            Err(err) if err.is_recoverable() => {
                println!("{}", err.user_message(CREATE_EXAMPLE));
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        match creator
            .create(&source)
            .with_context(|| format!("Couldn't create file {}", name))?
        {
            CreateOutcome::Created(path) => println!("File created at {}", path.display()),
            CreateOutcome::AlreadyExists(path) => {
                println!("File {} already exists at {}", name, path.display())
            }
        }
    }

    Ok(())
}
