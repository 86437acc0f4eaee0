use std::{fs, io::Write, path::PathBuf};

use clap::{Args, Subcommand};
use consign::{
    currency::Currency,
    editor::ProductEditor,
    pricing::{format_amount, format_money},
    products::Product,
    search::ShippingFilter,
    shipping::ShippingMode,
};
use consign_app::{config::AppConfig, dashboard::ProductList};

mod delete;
mod export;
mod list;
mod show;
mod write;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products, newest first
    List(list::ListArgs),

    /// Add a product
    Add(write::AddArgs),

    /// Change fields of a product
    Edit(write::EditArgs),

    /// Delete a product
    Delete(delete::DeleteArgs),

    /// Show one product
    Show(show::ShowArgs),

    /// Print the report table and write the report document
    Export(export::ExportArgs),
}

pub(crate) async fn run(config: &AppConfig, command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list::run(config, args).await,
        ProductsSubcommand::Add(args) => write::add(config, args).await,
        ProductsSubcommand::Edit(args) => write::edit(config, args).await,
        ProductsSubcommand::Delete(args) => delete::run(config, args).await,
        ProductsSubcommand::Show(args) => show::run(config, args).await,
        ProductsSubcommand::Export(args) => export::run(config, args).await,
    }
}

/// Search text and shipping filter applied before listing or exporting.
#[derive(Debug, Args)]
struct FilterArgs {
    /// Case-insensitive text matched against name, customer and phone
    #[arg(long)]
    search: Option<String>,

    /// Shipping filter (all, air, sea)
    #[arg(long)]
    shipping: Option<ShippingFilter>,
}

impl FilterArgs {
    fn apply(&self, list: &mut ProductList) {
        if let Some(search) = &self.search {
            list.set_query(search.clone());
        }

        list.set_shipping_filter(self.shipping);
    }
}

/// Product fields accepted by `add` and `edit`; omitted fields keep their
/// current or default value.
#[derive(Debug, Args)]
struct FieldArgs {
    /// Image file to embed
    #[arg(long, conflicts_with = "image_url")]
    image: Option<PathBuf>,

    /// Image URL to reference instead of embedding a file
    #[arg(long)]
    image_url: Option<String>,

    /// Product name
    #[arg(long)]
    name: Option<String>,

    /// Customer name
    #[arg(long)]
    customer: Option<String>,

    /// Customer phone number
    #[arg(long)]
    phone: Option<String>,

    /// Quantity; anything below 1 is stored as 1
    #[arg(long, allow_hyphen_values = true)]
    quantity: Option<String>,

    /// Unit price; negative values are stored as 0
    #[arg(long, allow_hyphen_values = true)]
    price: Option<String>,

    /// Currency (USD, RMB, MRU)
    #[arg(long)]
    currency: Option<Currency>,

    /// Shipping mode (air, sea)
    #[arg(long)]
    shipping: Option<ShippingMode>,

    /// Expected shipping duration, e.g. "7-10 days"
    #[arg(long)]
    duration: Option<String>,
}

impl FieldArgs {
    fn apply(self, editor: &mut ProductEditor) -> Result<(), String> {
        let invalid = |error: consign::editor::EditorError| error.to_string();

        if let Some(path) = self.image {
            let bytes = fs::read(&path)
                .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

            editor.attach_image(&bytes).map_err(invalid)?;
        }

        if let Some(url) = self.image_url {
            editor.set_image_url(url).map_err(invalid)?;
        }

        if let Some(name) = self.name {
            editor.set_name(name).map_err(invalid)?;
        }

        if let Some(customer) = self.customer {
            editor.set_customer_name(customer).map_err(invalid)?;
        }

        if let Some(phone) = self.phone {
            editor.set_phone_number(phone).map_err(invalid)?;
        }

        if let Some(quantity) = self.quantity {
            editor.set_quantity(&quantity).map_err(invalid)?;
        }

        if let Some(price) = self.price {
            editor.set_price(&price).map_err(invalid)?;
        }

        if let Some(currency) = self.currency {
            editor.set_currency(currency).map_err(invalid)?;
        }

        if let Some(mode) = self.shipping {
            editor.set_shipping_mode(mode).map_err(invalid)?;
        }

        if let Some(duration) = self.duration {
            editor.set_shipping_duration(duration).map_err(invalid)?;
        }

        Ok(())
    }
}

fn write_card(mut out: impl Write, product: &Product) -> std::io::Result<()> {
    let details = &product.details;

    writeln!(out, "{}", details.name)?;
    writeln!(out, "  id:        {}", product.uuid)?;
    writeln!(
        out,
        "  customer:  {} ({})",
        details.customer_name, details.phone_number
    )?;
    writeln!(
        out,
        "  price:     {} x {} = {}",
        details.quantity.get(),
        format_amount(details.price.get(), details.currency),
        total_text(product)
    )?;
    writeln!(
        out,
        "  shipping:  {} {}",
        details.shipping_mode.label(),
        details.shipping_duration
    )?;

    Ok(())
}

/// Formatted line total, or the reason it cannot be computed.
fn total_text(product: &Product) -> String {
    product
        .total()
        .map_or_else(|error| error.to_string(), |total| format_money(&total))
}

fn stdout_error(error: impl std::fmt::Display) -> String {
    format!("failed to write output: {error}")
}
