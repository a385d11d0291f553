pub mod blueprint;
pub mod common;
pub mod generation_plan;
pub mod render_context;
pub mod settings;

pub use blueprint::{Blueprint, FileTemplate};
pub use generation_plan::{GenerationPlan, RenderedFile};
pub use render_context::RenderContext;
pub use settings::ClusterSettings;
