use catalog_csv::{csv_row, parse_rows};

#[test]
fn test_csv_row_macro_empty() {
    let line = csv_row![];
    assert_eq!(line, "");
}

#[test]
fn test_csv_row_macro_plain() {
    assert_eq!(csv_row!["a", "b", "c"], "a,b,c");
}

#[test]
fn test_csv_row_macro_trailing_comma() {
    assert_eq!(csv_row!["a", "b",], "a,b");
}

#[test]
fn test_csv_row_macro_mixed_types() {
    let year = 2015;
    let rating = 4.5;
    let line = csv_row!["Sauvage", year, rating, true];
    assert_eq!(line, "Sauvage,2015,4.5,true");
}

#[test]
fn test_csv_row_macro_quotes_when_needed() {
    let description = String::from("fresh, \"spicy\"");
    let line = csv_row![description, "x"];
    assert_eq!(line, "\"fresh, \"\"spicy\"\"\",x");
    assert_eq!(parse_rows(&line), vec![vec!["fresh, \"spicy\"", "x"]]);
}

#[test]
fn test_csv_row_macro_empty_fields() {
    let line = csv_row!["", "men", ""];
    assert_eq!(line, ",men,");
}
