pub mod environment;
pub mod pipeline;

// Re-export commonly used types
pub use environment::Environment;
pub use pipeline::{Action, CommandRunner, Executor, Plan, Stage, SystemRunner};
