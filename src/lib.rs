pub mod layout;
pub mod manifest;
pub mod scaffold;
pub mod templates;

// Re-export commonly used types
pub use manifest::SkillManifest;
pub use scaffold::{Entry, ScaffoldPlan, ScaffoldRequest};
