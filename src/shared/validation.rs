use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for free-text fields that must carry at least one visible character
    /// - Valid: "Annapurna Kitchen", " x "
    /// - Invalid: "", "   ", "\t\n"
    pub static ref NOT_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}
