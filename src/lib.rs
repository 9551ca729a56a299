pub mod actions;
pub mod context;
pub mod games;
pub mod git;
pub mod github;
pub mod guidance;
pub mod params;
pub mod report;
pub mod scaffold;

// Re-export commonly used types
pub use context::PatchContext;
pub use games::{Game, GameSet};
pub use params::PatchConfig;
pub use report::{Diagnostic, Fault, Report};
