pub mod phase;
pub mod project;


pub use phase::summarize_phase;
pub use project::summarize_project;
