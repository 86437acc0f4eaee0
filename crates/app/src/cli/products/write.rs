use clap::Args;
use consign::products::ProductUuid;
use consign_app::config::AppConfig;

use super::FieldArgs;

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    #[command(flatten)]
    fields: FieldArgs,
}

#[derive(Debug, Args)]
pub(crate) struct EditArgs {
    /// Product UUID
    id: ProductUuid,

    #[command(flatten)]
    fields: FieldArgs,
}

pub(crate) async fn add(config: &AppConfig, args: AddArgs) -> Result<(), String> {
    let context = super::super::connect(config).await?;
    let mut list = context.product_list(&config.session);

    let editor = list
        .open_create_editor()
        .map_err(|error| error.to_string())?;

    args.fields.apply(editor)?;

    let uuid = list
        .submit_editor()
        .await
        .map_err(|error| format!("failed to add product: {error}"))?;

    println!("product_uuid: {uuid}");

    Ok(())
}

pub(crate) async fn edit(config: &AppConfig, args: EditArgs) -> Result<(), String> {
    let context = super::super::connect(config).await?;
    let mut list = context.product_list(&config.session);

    list.load()
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    let editor = list
        .open_edit_editor(args.id)
        .map_err(|error| error.to_string())?;

    args.fields.apply(editor)?;

    let uuid = list
        .submit_editor()
        .await
        .map_err(|error| format!("failed to update product: {error}"))?;

    println!("product_uuid: {uuid}");

    Ok(())
}
