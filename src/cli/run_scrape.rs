use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::debug;

use crate::models::{CliApp, Query, Region, Result, REGION_LABELS};
use crate::scrape::{FilterCriterion, ScrapeReport};

const PREVIEW_ROWS: usize = 5;

impl CliApp {
    /// Interactive scrape flow, from keyword prompt to exported CSV.
    pub async fn run_scrape(&self) -> Result<()> {
        println!("\n🔍 Keyword Lead Scraper");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let region = self.prompt_region().await?;

        let keyword: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your search keyword (e.g. 'salons', 'web agencies')")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("keyword must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let criteria = vec![
            FilterCriterion::All,
            FilterCriterion::EmailOnly,
            FilterCriterion::PhoneOnly,
            FilterCriterion::EmailAndPhone,
        ];
        let criterion_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Keep which leads?")
            .items(&criteria)
            .default(0)
            .interact()?;
        let criterion = criteria[criterion_index];

        let query = Query::new(&keyword, region)?;
        debug!(
            "Scrape requested: keyword='{}', region='{}', criterion='{}'",
            query.keyword(),
            query.region(),
            criterion
        );

        println!("\n🔎 Searching for '{}'...", query.search_text());
        let report = self.engine.run(&query, criterion).await;

        if report.stats.urls_discovered == 0 {
            println!("❌ No valid websites found. Check your keyword or try again later.");
            return Ok(());
        }

        self.display_report(&report, criterion);

        if report.table.is_empty() {
            return Ok(());
        }

        let export = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Export {} leads to CSV?", report.table.len()))
            .default(true)
            .interact()?;

        if !export {
            println!("❌ Export skipped, nothing written.");
            return Ok(());
        }

        let filename = self.exporter.generate_filename();
        self.exporter.export_to_csv(&report.table, &filename).await?;
        println!("\n✅ Done! {} leads saved to {}", report.table.len(), filename);

        Ok(())
    }

    /// Region selection, pre-seeded by IP geolocation when that works.
    async fn prompt_region(&self) -> Result<Region> {
        println!("📍 Detecting your location...");
        let detected = self.locator.detect_region().await;
        let default_index = match &detected {
            Some(region) => {
                println!("📍 Auto-detected location: {}", region);
                REGION_LABELS
                    .iter()
                    .position(|label| *label == region.label())
                    .unwrap_or(0)
            }
            None => {
                println!("📍 Could not detect a location, defaulting to {}", REGION_LABELS[0]);
                0
            }
        };

        let region_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select your state")
            .items(&REGION_LABELS)
            .default(default_index)
            .interact()?;

        debug!("Region selected: {}", REGION_LABELS[region_index]);
        Ok(Region::parse(REGION_LABELS[region_index]).unwrap_or(Region::Unscoped))
    }

    fn display_report(&self, report: &ScrapeReport, criterion: FilterCriterion) {
        let stats = &report.stats;

        println!("\n📊 Run Summary");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("🌐 Websites found: {}", stats.urls_discovered);
        println!(
            "📄 Pages scraped: {} ({} unreachable)",
            stats.pages_fetched, stats.fetch_failures
        );
        println!("⏱️  Elapsed: {:.1}s", stats.duration.as_secs_f64());

        if stats.records_extracted() == 0 {
            println!("\n⚠️  No leads found. Try different keywords.");
            return;
        }

        if report.table.is_empty() {
            println!(
                "\n⚠️  {} leads extracted, but none match the '{}' filter.",
                stats.records_extracted(),
                criterion
            );
            return;
        }

        println!("🎯 Leads kept: {}", report.table.len());

        println!(
            "\n📋 Preview (first {} of {}):",
            report.table.len().min(PREVIEW_ROWS),
            report.table.len()
        );
        for record in report.table.iter().take(PREVIEW_ROWS) {
            println!("  • {}", record.website);
            if record.has_email() {
                println!("      📧 {}", record.emails.join(", "));
            }
            if record.has_phone() {
                println!("      📞 {}", record.phones.join(", "));
            }
        }
    }
}
