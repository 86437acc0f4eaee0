use std::io;

use clap::Args;
use consign::products::ProductUuid;
use consign_app::config::AppConfig;

use super::{FilterArgs, stdout_error};

#[derive(Debug, Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Export a single product instead of the filtered list
    #[arg(long, conflicts_with_all = ["search", "shipping"])]
    product: Option<ProductUuid>,
}

pub(crate) async fn run(config: &AppConfig, args: ExportArgs) -> Result<(), String> {
    let context = super::super::connect(config).await?;

    let contact = context
        .contact_settings(&config.session)
        .load()
        .await
        .map_err(|error| format!("failed to load contact settings: {error}"))?
        .clone();

    let mut list = context.product_list(&config.session);

    list.load()
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    let organization = config.export.organization();

    let report = match args.product {
        Some(product) => {
            list.open_details(product)
                .map_err(|error| error.to_string())?;

            list.details_report(&organization, &contact)
                .map_err(|error| format!("failed to export product: {error}"))?
        }
        None => {
            args.filter.apply(&mut list);

            list.report(&organization, &contact)
                .map_err(|error| format!("failed to export products: {error}"))?
        }
    };

    report
        .write_table(io::stdout().lock())
        .map_err(stdout_error)?;

    let path = config
        .export
        .renderer()
        .write(&report)
        .map_err(|error| format!("failed to write report: {error}"))?;

    println!("report: {}", path.display());

    Ok(())
}
