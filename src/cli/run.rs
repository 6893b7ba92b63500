use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
};
use tracing::error;

impl CliApp {
    pub async fn run(&self) -> Result<()> {
        println!("\n🚀 Welcome to Lead Harvester!");
        println!("═══════════════════════════════════════");

        loop {
            let actions = vec![
                MenuAction::ScrapeLeads,
                MenuAction::ShowSettings,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect an action")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::ScrapeLeads => {
                    if let Err(e) = self.run_scrape().await {
                        error!("Scrape run failed: {}", e);
                    }
                }
                MenuAction::ShowSettings => {
                    if let Err(e) = self.show_settings() {
                        error!("Failed to show settings: {}", e);
                    }
                }
                MenuAction::Exit => {
                    println!("\n👋 Thanks for using Lead Harvester!");
                    break;
                }
            }
        }

        Ok(())
    }
}
