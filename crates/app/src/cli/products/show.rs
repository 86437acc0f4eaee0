use std::io;

use clap::Args;
use consign::products::ProductUuid;
use consign_app::config::AppConfig;

use super::{stdout_error, write_card};

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Product UUID
    id: ProductUuid,
}

pub(crate) async fn run(config: &AppConfig, args: ShowArgs) -> Result<(), String> {
    let context = super::super::connect(config).await?;
    let mut list = context.product_list(&config.session);

    list.load()
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    let product = list
        .open_details(args.id)
        .map_err(|error| error.to_string())?;

    write_card(io::stdout().lock(), product).map_err(stdout_error)?;

    if !product.details.image.is_empty() {
        println!("  image:     {}", image_summary(&product.details.image));
    }

    Ok(())
}

fn image_summary(image: &str) -> String {
    if consign::editor::image::is_data_url(image) {
        format!("embedded ({} bytes encoded)", image.len())
    } else {
        image.to_string()
    }
}
