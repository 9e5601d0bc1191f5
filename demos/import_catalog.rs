//! Reads a catalog export into typed records.
//!
//! Run with: cargo run --example import_catalog

use catalog_csv::{parse_records, Entry};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Accord {
    name: String,
    width: String,
}

const EXPORT: &str = "\u{FEFF}Name,Brand,Main Accords,Perfumers\r\n\
Sauvage,Dior,\"{\"\"name\"\":\"\"fresh spicy\"\",\"\"width\"\":\"\"100%\"\"}\",\"{\"\"name\"\":\"\"François Demachy\"\"}\"\r\n\
\r\n\
Aventus,Creed,\"{\"\"name\"\":\"\"fruity\"\",\"\"width\"\":\"\"100%\"\"}|{\"\"name\"\":\"\"smoky\"\",\"\"width\"\":\"\"55%\"\"}\",Olivier Creed\r\n";

fn main() -> Result<(), Box<dyn Error>> {
    for record in parse_records(EXPORT)? {
        let accords: Vec<Accord> = record.composite_as("Main Accords")?;
        let perfumers: Vec<String> = record
            .composite("Perfumers")
            .iter()
            .map(|entry| match entry.get("name") {
                Some(name) => name.as_str().unwrap_or_default().to_string(),
                None => entry.to_string(),
            })
            .collect();

        println!(
            "{} by {}: {} accord(s), perfumers {:?}",
            record.get("Name").unwrap_or_default(),
            record.get("Brand").unwrap_or_default(),
            accords.len(),
            perfumers
        );
        for accord in &accords {
            println!("  {} ({})", accord.name, accord.width);
        }

        let raw = record
            .composite("Perfumers")
            .into_iter()
            .filter(Entry::is_raw)
            .count();
        if raw > 0 {
            println!("  {} perfumer(s) stored as plain text", raw);
        }
    }

    Ok(())
}
