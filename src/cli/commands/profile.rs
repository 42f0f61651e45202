use anyhow::Result;
use clap::{Args, Subcommand};
use owo_colors::OwoColorize;

use crate::profile::{self, ProfileUpdate};
use crate::transport::ApiClient;
use crate::ui::{NoticeKind, TermUi, UiHandle};

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the signed-in user and display preferences
    Show,

    /// Update profile fields; omitted fields are left unchanged
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Preferred currency code, e.g. INR
        #[arg(long)]
        currency: Option<String>,

        /// UI theme, e.g. light or dark
        #[arg(long)]
        theme: Option<String>,
    },
}

pub async fn execute(api: &ApiClient, args: ProfileArgs) -> Result<()> {
    let ui = TermUi::new(false);

    match args.action {
        ProfileAction::Show => match profile::fetch_profile(api).await {
            Ok(profile) => {
                println!("{} <{}>", profile.user.name.bold(), profile.user.email);
                println!("Member since: {}", profile.user.created_at);
                println!(
                    "Currency: {}   Theme: {}",
                    profile.preferences.currency, profile.preferences.theme
                );
            }
            Err(err) => ui.notify(&err.to_string(), NoticeKind::Error),
        },
        ProfileAction::Set {
            name,
            currency,
            theme,
        } => {
            let update = ProfileUpdate {
                name,
                currency,
                theme,
            };
            if update.is_empty() {
                ui.notify("Nothing to update", NoticeKind::Error);
                return Ok(());
            }

            match profile::update_profile(api, &update).await {
                Ok(_) => ui.notify("Profile updated", NoticeKind::Success),
                Err(err) => ui.notify(&err.to_string(), NoticeKind::Error),
            }
        }
    }

    Ok(())
}
