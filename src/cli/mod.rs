pub mod cli;
pub mod run;
pub mod run_scrape;
pub mod show_settings;
