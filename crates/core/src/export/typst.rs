//! Typst document renderer
//!
//! Writes the downloadable report as a Typst source file. Inline images are
//! written next to it so the document can embed them.
//!
//! ```rust,no_run
//! use consign::{
//!     contact::{ContactInfo, Organization},
//!     export::{ReportContent, TypstRenderer},
//! };
//! # fn example(products: &[consign::products::Product]) -> Result<(), consign::export::ExportError> {
//! let report = ReportContent::build(&Organization::default(), &ContactInfo::default(), products)?;
//!
//! let path = TypstRenderer::new(".").write(&report)?;
//! # let _ = path;
//! # Ok(())
//! # }
//! ```

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use super::{ExportError, ReportContent, ReportRow, Thumbnail};

/// Fixed name of the downloadable document.
pub const EXPORT_FILE_NAME: &str = "products.typ";

/// Directory, next to the document, that holds embedded images.
pub const ASSETS_DIR_NAME: &str = "products-assets";

/// Renders a [`ReportContent`] to a Typst document.
#[derive(Debug, Clone)]
pub struct TypstRenderer {
    /// Directory the document and its assets are written to
    output_dir: PathBuf,
}

impl TypstRenderer {
    /// Create a renderer writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the document [`TypstRenderer::write`] produces.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(EXPORT_FILE_NAME)
    }

    /// Render the report to Typst source.
    pub fn render(&self, report: &ReportContent) -> String {
        let mut output = String::new();

        output.push_str("#set page(paper: \"a4\", flipped: true, margin: 1.5cm)\n");
        output.push_str("#set text(size: 9pt)\n\n");

        Self::render_header(report, &mut output);
        Self::render_rows(report, &mut output);
        Self::render_totals(report, &mut output);

        output
    }

    /// Write the document and its images, returning the document path.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if a file or directory cannot be written.
    pub fn write(&self, report: &ReportContent) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.output_dir)?;

        let assets = self.output_dir.join(ASSETS_DIR_NAME);

        for row in &report.rows {
            if let (Some(asset), Thumbnail::Inline { bytes, .. }) = (asset_path(row), &row.thumbnail)
            {
                fs::create_dir_all(&assets)?;
                fs::write(self.output_dir.join(asset), bytes)?;
            }
        }

        let path = self.output_path();

        fs::write(&path, self.render(report))?;

        info!(path = %path.display(), rows = report.rows.len(), "exported products");

        Ok(path)
    }

    fn render_header(report: &ReportContent, output: &mut String) {
        let org = &report.organization;

        _ = writeln!(
            output,
            "#align(center, stack(spacing: 4pt,\n  text(size: 16pt, weight: \"bold\", {}),\n  text({}),\n  text(fill: gray, {}),\n))\n",
            string(&org.name),
            string(&org.tagline),
            string(&org.location),
        );

        let contact = &report.contact;

        let cells = [
            format!("Email: {}", contact.email.trim()),
            format!("Phone: {}", contact.phones()),
            format!("WhatsApp: {}", contact.whatsapps()),
        ];

        _ = writeln!(
            output,
            "#grid(columns: (1fr, 1fr, 1fr), {})\n",
            cells
                .iter()
                .map(|cell| string(cell))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    fn render_rows(report: &ReportContent, output: &mut String) {
        output.push_str("#table(\n  columns: 10,\n  align: (center, left, left, center, left, right, right, left, left, right),\n");
        output.push_str("  table.header(");
        output.push_str(
            &[
                "#", "Customer", "Phone", "Image", "Product", "Qty", "Price", "Shipping",
                "Duration", "Total",
            ]
            .map(|title| format!("[*{title}*]"))
            .join(", "),
        );
        output.push_str("),\n");

        for row in &report.rows {
            let cells = [
                string(&row.number.to_string()),
                string(&row.customer),
                string(&row.phone),
                thumbnail(row),
                string(&row.name),
                string(&row.quantity.to_string()),
                string(&row.price),
                string(row.shipping),
                string(&row.duration),
                string(&row.total),
            ];

            _ = writeln!(output, "  {},", cells.join(", "));
        }

        output.push_str(")\n\n");
    }

    fn render_totals(report: &ReportContent, output: &mut String) {
        for line in report.total.lines() {
            _ = writeln!(
                output,
                "#align(right, text(weight: \"bold\", {}))",
                string(&line)
            );
        }
    }
}

/// Relative path of a row's embedded image, if it has one.
fn asset_path(row: &ReportRow) -> Option<PathBuf> {
    match &row.thumbnail {
        Thumbnail::Inline { kind, .. } => Some(
            Path::new(ASSETS_DIR_NAME).join(format!("row-{}.{}", row.number, kind.extension())),
        ),
        Thumbnail::Remote(_) | Thumbnail::Missing => None,
    }
}

fn thumbnail(row: &ReportRow) -> String {
    match (&row.thumbnail, asset_path(row)) {
        (Thumbnail::Inline { .. }, Some(path)) => {
            // Typst paths always use forward slashes.
            let path = path.to_string_lossy().replace('\\', "/");

            format!("image({}, width: 1.5cm)", string(&path))
        }
        (Thumbnail::Remote(url), _) => format!("link({0}, {0})", string(url)),
        _ => string("-"),
    }
}

/// Quote `value` as a Typst string literal.
fn string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);

    quoted.push('"');

    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(ch),
        }
    }

    quoted.push('"');

    quoted
}
