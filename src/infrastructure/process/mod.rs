mod command_runner;

pub use command_runner::{CommandOutput, ProcessError, run_with_timeout};
