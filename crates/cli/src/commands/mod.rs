pub mod create;
pub mod run;

pub use create::create_command;
pub use run::run_command;
