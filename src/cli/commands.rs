pub mod project;
pub mod serve;

pub use project::{OutputFormat, ProjectOptions, project_file};
pub use serve::serve;
