//! Terminal rendering module for rich markdown output
//!
//! Markdown produced by the core display types is styled with termimad, or
//! printed unchanged when color is disabled.

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Formats markdown for the terminal without printing it
    pub fn format(&self, markdown: &str) -> String {
        if self.rich_enabled {
            self.skin.term_text(markdown).to_string()
        } else {
            markdown.to_string()
        }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) {
        print!("{}", self.format(markdown));
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer_passes_markdown_through() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert_eq!(renderer.format("## Title\n\n- item\n"), "## Title\n\n- item\n");
    }

    #[test]
    fn test_rich_renderer_keeps_text() {
        let renderer = TerminalRenderer::new(true);
        let output = renderer.format("Paso 2: Seguridad\n");
        assert!(output.contains("Paso 2: Seguridad"));
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
