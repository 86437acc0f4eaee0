use std::io::{self, Write};

use clap::Args;
use consign::{contact::ContactInfo, export::ExportError, products::Product};
use consign_app::{config::AppConfig, dashboard::ViewMode};
use serde::Serialize;

use super::{FilterArgs, stdout_error, total_text, write_card};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Show products as cards or as a table
    #[arg(long, value_enum, default_value_t = ViewMode::Card)]
    view: ViewMode,

    /// Print JSON instead of a human-readable view
    #[arg(long, conflicts_with = "view")]
    json: bool,
}

/// Machine-readable shape of one listed product.
#[derive(Debug, Serialize)]
struct ProductView<'a> {
    uuid: String,
    name: &'a str,
    customer_name: &'a str,
    phone_number: &'a str,
    quantity: u32,
    price: String,
    currency: &'static str,
    shipping_mode: &'static str,
    shipping_duration: &'a str,
    total: String,
}

impl<'a> From<&'a Product> for ProductView<'a> {
    fn from(product: &'a Product) -> Self {
        let details = &product.details;

        Self {
            uuid: product.uuid.to_string(),
            name: &details.name,
            customer_name: &details.customer_name,
            phone_number: &details.phone_number,
            quantity: details.quantity.get(),
            price: details.price.get().to_string(),
            currency: details.currency.code(),
            shipping_mode: details.shipping_mode.code(),
            shipping_duration: &details.shipping_duration,
            total: total_text(product),
        }
    }
}

pub(crate) async fn run(config: &AppConfig, args: ListArgs) -> Result<(), String> {
    let context = super::super::connect(config).await?;
    let mut list = context.product_list(&config.session);

    list.load()
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    args.filter.apply(&mut list);
    list.set_view_mode(args.view);

    let mut out = io::stdout().lock();

    if args.json {
        let views: Vec<ProductView<'_>> = list.filtered_view().map(ProductView::from).collect();

        serde_json::to_writer_pretty(&mut out, &views).map_err(stdout_error)?;
        writeln!(out).map_err(stdout_error)?;

        return Ok(());
    }

    match list.view_mode() {
        ViewMode::Card => {
            for product in list.filtered_view() {
                write_card(&mut out, product).map_err(stdout_error)?;
            }
        }
        ViewMode::Table => {
            match list.report(&config.export.organization(), &ContactInfo::default()) {
                Ok(report) => report.write_table(&mut out).map_err(stdout_error)?,
                Err(ExportError::Empty) => {}
                Err(error) => return Err(format!("failed to build table: {error}")),
            }
        }
    }

    Ok(())
}
