//! Screen print path

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use super::{ExportError, ReportContent, Thumbnail};

const HEADER: [&str; 10] = [
    "#",
    "Customer",
    "Phone",
    "Image",
    "Product",
    "Qty",
    "Price",
    "Shipping",
    "Duration",
    "Total",
];

impl ReportContent {
    /// Print the report as a terminal table.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if `out` cannot be written.
    pub fn write_table(&self, mut out: impl io::Write) -> Result<(), ExportError> {
        for line in self.header_lines() {
            writeln!(out, "{line}")?;
        }

        let mut builder = Builder::default();

        builder.push_record(HEADER);

        for row in &self.rows {
            builder.push_record([
                row.number.to_string(),
                row.customer.clone(),
                row.phone.clone(),
                thumbnail_cell(&row.thumbnail).to_string(),
                row.name.clone(),
                row.quantity.to_string(),
                row.price.clone(),
                row.shipping.to_string(),
                row.duration.clone(),
                row.total.clone(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(5..7), Alignment::right());
        table.modify(Columns::last(), Alignment::right());

        writeln!(out, "\n{table}")?;

        for line in self.total.lines() {
            writeln!(out, " {line}")?;
        }

        writeln!(out)?;

        Ok(())
    }
}

fn thumbnail_cell(thumbnail: &Thumbnail) -> &'static str {
    match thumbnail {
        Thumbnail::Inline { kind, .. } => kind.extension(),
        Thumbnail::Remote(_) => "link",
        Thumbnail::Missing => "-",
    }
}
