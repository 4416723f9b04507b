pub mod param_catalog;

pub use param_catalog::{render_all, RenderContext};
