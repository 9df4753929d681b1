mod renderer;

pub use renderer::{render_document, render_input, render_nodes, RenderError, RenderOptions};
