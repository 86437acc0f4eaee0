use clap::Args;
use consign::products::ProductUuid;
use consign_app::config::AppConfig;

#[derive(Debug, Args)]
pub(crate) struct DeleteArgs {
    /// Product UUID
    id: ProductUuid,

    /// Confirm the deletion
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(config: &AppConfig, args: DeleteArgs) -> Result<(), String> {
    let context = super::super::connect(config).await?;
    let mut list = context.product_list(&config.session);

    list.load()
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    list.request_remove(args.id)
        .map_err(|error| error.to_string())?;

    if !args.yes {
        list.cancel();

        return Err(format!(
            "refusing to delete product {} without --yes",
            args.id
        ));
    }

    list.confirm_remove()
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    println!("deleted: {}", args.id);

    Ok(())
}
