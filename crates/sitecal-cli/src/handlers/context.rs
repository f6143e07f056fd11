use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, RenderOptions};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: RenderOptions,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        let color = format == OutputFormat::Plain
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        Self {
            format,
            options: RenderOptions { color },
        }
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format.into(), self.options);
        renderer.render(view_model)
    }
}
