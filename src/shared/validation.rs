use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Attachment ids are plain decimal numbers
    /// - Valid: "1", "0042", "873465987346"
    /// - Invalid: "", "-1", "1e3", "12a", "../1"
    pub static ref ATTACHMENT_ID_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();

    /// Attachment filenames only carry the display extension, so path separators
    /// and anything outside ASCII alphanumerics, dots, underscores and hyphens are refused
    /// - Valid: "image.png", "Screen_Shot-1.JPG", "archive.tar.gz", "42"
    /// - Invalid: "", "a/b.png", "a\\b.png", "my file.txt", "é.txt"
    ///
    /// Case-insensitivity is spelled out as ASCII ranges: `(?i)` would also
    /// accept Unicode case folds such as U+212A KELVIN SIGN for `k`.
    pub static ref ATTACHMENT_FILENAME_REGEX: Regex = Regex::new(r"^[0-9a-zA-Z._-]+$").unwrap();
}
