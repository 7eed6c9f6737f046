//! Outline rendering service
//!
//! Parses an outline, builds its tree and renders it with the configured style.

use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{Outline, ParseOptions, Summary};

/// Service turning outline text into diagrams and inspection listings.
#[derive(Debug, Clone, Default)]
pub struct TreeifyService {
    settings: Settings,
}

impl TreeifyService {
    /// Create a new service with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    fn outline(&self, input: &str) -> ApplicationResult<Outline> {
        let options = ParseOptions {
            context_lines: self.settings.context_lines,
        };
        Ok(Outline::parse_with(input, options)?)
    }

    /// Render the outline as a tree diagram.
    #[instrument(level = "debug", skip(self, input))]
    pub fn render(&self, input: &str) -> ApplicationResult<String> {
        let outline = self.outline(input)?;
        debug!(nodes = outline.tree().len(), style = %self.settings.style, "rendering");
        Ok(outline.render(self.settings.style))
    }

    /// Summary header plus one entry per node.
    #[instrument(level = "debug", skip(self, input))]
    pub fn inspect_nodes(&self, input: &str) -> ApplicationResult<String> {
        Ok(self.outline(input)?.inspect_nodes())
    }

    /// Summary header plus the retained raw lines.
    #[instrument(level = "debug", skip(self, input))]
    pub fn inspect_lines(&self, input: &str) -> ApplicationResult<String> {
        Ok(self.outline(input)?.inspect_lines())
    }

    /// Validate only.
    #[instrument(level = "debug", skip(self, input))]
    pub fn check(&self, input: &str) -> ApplicationResult<Summary> {
        Ok(self.outline(input)?.summary())
    }
}
