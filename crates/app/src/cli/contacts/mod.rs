use clap::{Args, Subcommand};
use consign::contact::ContactInfo;
use consign_app::config::AppConfig;

#[derive(Debug, Args)]
pub(crate) struct ContactsCommand {
    #[command(subcommand)]
    command: ContactsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ContactsSubcommand {
    /// Show the contact details printed on reports
    Show,

    /// Change the contact details printed on reports
    Set(SetContactArgs),
}

/// Omitted fields keep their saved value; pass an empty string to clear one.
#[derive(Debug, Args)]
struct SetContactArgs {
    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    phone1: Option<String>,

    #[arg(long)]
    phone2: Option<String>,

    #[arg(long)]
    whatsapp1: Option<String>,

    #[arg(long)]
    whatsapp2: Option<String>,
}

impl SetContactArgs {
    fn merge(self, current: &ContactInfo) -> ContactInfo {
        ContactInfo {
            email: self.email.unwrap_or_else(|| current.email.clone()),
            phone1: self.phone1.unwrap_or_else(|| current.phone1.clone()),
            phone2: self.phone2.unwrap_or_else(|| current.phone2.clone()),
            whatsapp1: self.whatsapp1.unwrap_or_else(|| current.whatsapp1.clone()),
            whatsapp2: self.whatsapp2.unwrap_or_else(|| current.whatsapp2.clone()),
        }
    }
}

pub(crate) async fn run(config: &AppConfig, command: ContactsCommand) -> Result<(), String> {
    let context = super::connect(config).await?;
    let mut settings = context.contact_settings(&config.session);

    let current = settings
        .load()
        .await
        .map_err(|error| format!("failed to load contact settings: {error}"))?
        .clone();

    let contact = match command.command {
        ContactsSubcommand::Show => current,
        ContactsSubcommand::Set(args) => settings
            .save(args.merge(&current))
            .await
            .map_err(|error| format!("failed to save contact settings: {error}"))?
            .clone(),
    };

    println!("email: {}", contact.email);
    println!("phones: {}", contact.phones());
    println!("whatsapp: {}", contact.whatsapps());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_omitted_fields() {
        let current = ContactInfo {
            email: "office@example.com".to_string(),
            phone1: "20000001".to_string(),
            ..ContactInfo::default()
        };

        let args = SetContactArgs {
            email: None,
            phone1: Some(String::new()),
            phone2: Some("20000003".to_string()),
            whatsapp1: None,
            whatsapp2: None,
        };

        let merged = args.merge(&current);

        assert_eq!(merged.email, "office@example.com");
        assert_eq!(merged.phone1, "");
        assert_eq!(merged.phone2, "20000003");
    }
}
