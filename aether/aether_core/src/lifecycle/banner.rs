//! Startup and closing banner.

use std::io::Write;

/// Fixed informational text printed around the application lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    product: String,
    version: String,
    built_at: String,
}

impl Banner {
    /// Create a banner.
    ///
    /// # Arguments
    ///
    /// * `product` - Product name shown in the title and closing lines.
    /// * `version` - Version string, e.g. `1.0.0`.
    /// * `built_at` - Build timestamp captured at compile time.
    pub fn new(
        product: impl Into<String>,
        version: impl Into<String>,
        built_at: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            version: version.into(),
            built_at: built_at.into(),
        }
    }

    /// The title line.
    pub fn title(&self) -> String {
        format!("=== {} - Desktop Streaming Application ===", self.product)
    }

    /// The lines printed before the application is constructed.
    ///
    /// The last entry is empty and separates the banner from later output.
    pub fn opening_lines(&self) -> Vec<String> {
        vec![
            self.title(),
            format!("Version: {}", self.version),
            format!("Built: {}", self.built_at),
            String::new(),
        ]
    }

    /// The line printed after a normal shutdown.
    pub fn closing_line(&self) -> String {
        format!("=== {} - Application closed ===", self.product)
    }

    /// Write the opening lines to `out`.
    pub fn write_opening(&self, out: &mut impl Write) -> std::io::Result<()> {
        for line in self.opening_lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    /// Write the closing line to `out`.
    pub fn write_closing(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.closing_line())?;
        out.flush()
    }
}
