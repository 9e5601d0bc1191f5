/// Builds one CSV line from a list of displayable expressions.
///
/// Each expression is escaped with [`escape_field`](crate::escape_field) and
/// the results are joined with `,`.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::csv_row;
///
/// let line = csv_row!["Bleu de Chanel", "Chanel", 2010, "woody, aromatic"];
/// assert_eq!(line, "Bleu de Chanel,Chanel,2010,\"woody, aromatic\"");
///
/// assert_eq!(csv_row![], "");
/// ```
#[macro_export]
macro_rules! csv_row {
    // Handle empty row
    () => {
        ::std::string::String::new()
    };

    ($($field:expr),+ $(,)?) => {{
        let fields: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$($crate::escape_field(&$field)),+];
        fields.join(",")
    }};
}
