//! Canned homepages and entries.

use chrono::NaiveDate;
use spotlight_core::domains::batch::EntryInput;

pub const ACME_URL: &str = "https://example.com";

pub const ACME_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Acme Co</title><script>var tracking = 1;</script></head>
<body>
  <nav><a href="/">Home</a></nav>
  <h1>Acme Co Freight</h1>
  <h2>Coast to coast, on time</h2>
  <p>We move dry van and reefer loads across the lower 48.</p>
  <p>Family owned since 1987.</p>
  <footer>Copyright Acme Co</footer>
</body>
</html>"#;

/// Fixed batch date so file names are predictable.
pub fn batch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

pub fn acme() -> EntryInput {
    EntryInput::new("Acme Co", ACME_URL)
}

/// A small homepage naming the company.
pub fn homepage(name: &str) -> String {
    format!("<html><body><h1>{name}</h1><p>{name} ships freight.</p></body></html>")
}
