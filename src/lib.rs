//! Normalizes a documentation front-end's declaration graph into `RenderType`,
//! a small closed vocabulary of type descriptions for documentation renderers.
pub mod cli;
pub mod error;
pub mod jq_exec;
pub mod normalize;
pub mod path_de;
pub mod reflection;
pub mod render;
pub mod resolve;

pub use error::RenderError;
pub use normalize::{render_declaration, Normalizer};
pub use reflection::{CommentExtractor, Declaration, SummaryText};
pub use render::{RenderKind, RenderType, Shape};
pub use resolve::{Link, ProjectIndex, ReferenceResolver, RenderOptions};
