use crate::models::{CliApp, Result};

impl CliApp {
    pub fn show_settings(&self) -> Result<()> {
        let config = &self.config;

        println!("\n⚙️  Active Settings");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!(
            "🔎 Search: up to {} results, {}s API timeout",
            config.search.result_cap, config.search.api_timeout_seconds
        );
        println!(
            "🌐 Fetch: {}s timeout, {} concurrent, agent '{}'",
            config.fetch.timeout_seconds,
            config.fetch.max_concurrent_fetches,
            config.fetch.user_agent
        );

        let phone_rule = if config.extraction.restrict_phone_prefix {
            let digits: Vec<String> = config
                .extraction
                .phone_prefix_digits
                .iter()
                .map(|d| d.to_string())
                .collect();
            format!("10 digits starting with {}", digits.join("/"))
        } else {
            "any 10-digit run".to_string()
        };
        println!("📞 Phone rule: {}", phone_rule);
        println!("📁 Output directory: {}", config.output.directory);
        println!("📝 Log level: {}", config.logging.level);

        Ok(())
    }
}
