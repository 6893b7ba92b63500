use chrono::Utc;
use tracing::info;

use crate::models::Result;
use crate::scrape::LeadRecord;

const CSV_HEADER: &str = "Website,Emails,Phones";

pub struct LeadExporter {
    output_directory: String,
}

impl LeadExporter {
    pub fn new(output_directory: String) -> Self {
        Self { output_directory }
    }

    /// Timestamped target path, unique per run at second granularity.
    pub fn generate_filename(&self) -> String {
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        format!("{}/leads_{}.csv", self.output_directory, timestamp)
    }

    pub async fn export_to_csv(&self, table: &[LeadRecord], filename: &str) -> Result<()> {
        if let Some(parent) = std::path::Path::new(filename).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = render_csv(table);
        std::fs::write(filename, content)?;

        info!("💾 Exported {} leads to {}", table.len(), filename);
        Ok(())
    }
}

/// One row per record. Emails and phones are joined with ", " inside their
/// cells, so those cells are comma-bearing and get quoted.
fn render_csv(table: &[LeadRecord]) -> String {
    let mut content = String::from(CSV_HEADER);
    content.push('\n');
    for record in table {
        content.push_str(&format!(
            "{},{},{}\n",
            csv_field(&record.website),
            csv_field(&record.emails.join(", ")),
            csv_field(&record.phones.join(", "))
        ));
    }
    content
}

fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
