//! Builds the downloadable sample template for catalog import.
//!
//! Run with: cargo run --example sample_template

use catalog_csv::{csv_row, to_composite, CsvOptions, Writer};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Named {
    name: &'static str,
}

#[derive(Serialize)]
struct Weighted {
    name: &'static str,
    width: &'static str,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::new(CsvOptions::spreadsheet());
    writer.write_record([
        "Name",
        "Brand",
        "Release Year",
        "Gender",
        "Main Accords",
        "Top Notes",
        "Seasons",
        "Perfumers",
    ]);

    let accords = [
        Weighted { name: "citrus", width: "100%" },
        Weighted { name: "aromatic", width: "68%" },
    ];
    let seasons = [
        Weighted { name: "winter", width: "30%" },
        Weighted { name: "spring", width: "25%" },
    ];
    let top_notes = [Named { name: "Grapefruit" }, Named { name: "Lemon" }];
    let perfumers = [Named { name: "Jacques Polge" }];

    writer.write_line(&csv_row![
        "Bleu de Chanel",
        "Chanel",
        "",
        "men",
        to_composite(&accords)?,
        to_composite(&top_notes)?,
        to_composite(&seasons)?,
        to_composite(&perfumers)?,
    ]);

    let csv = writer.into_inner();
    println!("{}", csv.trim_start_matches('\u{FEFF}'));
    Ok(())
}
