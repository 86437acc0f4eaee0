//! Export Config

use std::path::PathBuf;

use clap::Args;
use consign::{contact::Organization, export::TypstRenderer};

/// Report export settings.
#[derive(Debug, Args)]
pub struct ExportConfig {
    /// Directory the report document is written to
    #[arg(long, env = "EXPORT_DIR", default_value = ".")]
    pub export_dir: PathBuf,

    /// Organization name printed in the report header
    #[arg(long, env = "ORGANIZATION_NAME")]
    pub organization_name: Option<String>,

    /// Tagline printed under the organization name
    #[arg(long, env = "ORGANIZATION_TAGLINE")]
    pub organization_tagline: Option<String>,

    /// Office location printed in the report header
    #[arg(long, env = "ORGANIZATION_LOCATION")]
    pub organization_location: Option<String>,
}

impl ExportConfig {
    /// Organization identity, falling back to the built-in defaults.
    #[must_use]
    pub fn organization(&self) -> Organization {
        let defaults = Organization::default();

        Organization {
            name: self.organization_name.clone().unwrap_or(defaults.name),
            tagline: self.organization_tagline.clone().unwrap_or(defaults.tagline),
            location: self
                .organization_location
                .clone()
                .unwrap_or(defaults.location),
        }
    }

    /// Document renderer writing into the export directory.
    #[must_use]
    pub fn renderer(&self) -> TypstRenderer {
        TypstRenderer::new(self.export_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_overrides_only_given_fields() {
        let config = ExportConfig {
            export_dir: PathBuf::from("."),
            organization_name: Some("Harbour Trading".to_string()),
            organization_tagline: None,
            organization_location: None,
        };

        let organization = config.organization();

        assert_eq!(organization.name, "Harbour Trading");
        assert_eq!(organization.location, Organization::default().location);
    }
}
