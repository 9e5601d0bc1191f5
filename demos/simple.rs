//! Escaping fields and parsing them back.
//!
//! Run with: cargo run --example simple

use catalog_csv::{csv_row, parse_rows};

fn main() {
    let header = csv_row!["Name", "Brand", "Description"];
    let row = csv_row!["Aventus", "Creed", "Pineapple, birch and \"smoky\" musk"];
    let csv = format!("{}\n{}\n", header, row);
    println!("CSV output:\n{}", csv);

    let rows = parse_rows(&csv);
    assert_eq!(rows[1][2], "Pineapple, birch and \"smoky\" musk");
    println!("✓ Round-trip successful: {:?}", rows);
}
