//! Helpers for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Profile configuration for the entities exercised by the integration tests,
/// written to a temporary YAML file.
pub fn write_profiles_yaml() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temporary profiles file.");
    file.write_all(
        br#"
default_min_score: 0.6
entities:
  - name: Traba
    industry_terms:
      - staffing
      - shifts
      - platform
    company_identifiers:
      - Traba Inc
    founders:
      - Mike Shebat
  - name: Wonolo
    industry_terms:
      - gig
      - staffing
    company_identifiers:
      - Wonolo Inc
    min_score: 0.5
"#,
    )
    .expect("Failed to write temporary profiles file.");
    file
}
