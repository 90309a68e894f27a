//! CSV export of extraction results.

use crate::error::{ExtractError, Result};
use crate::types::ExtractionResult;

/// Header row of the exported CSV.
pub const EXPORT_HEADER: [&str; 3] = ["email", "domain", "provenance"];

/// Serialize the result to CSV bytes.
///
/// Deterministic and order-preserving: one row per unique address, in the
/// insertion order of the merged result set.
pub fn export_csv(result: &ExtractionResult) -> Vec<u8> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // Writing into a Vec cannot fail.
    writer.write_record(EXPORT_HEADER).unwrap();
    for found in result.entries() {
        writer
            .write_record([
                found.address.as_str(),
                found.address.domain(),
                &found.provenance.to_string(),
            ])
            .unwrap();
    }

    writer.into_inner().unwrap()
}

/// Parse bytes produced by [`export_csv`] back into its rows.
///
/// Returns `(email, domain, provenance)` tuples in file order; used to
/// verify round-trips.
pub fn parse_exported(bytes: &[u8]) -> Result<Vec<(String, String, String)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::MalformedInput {
            reason: e.to_string(),
        })?;
        if record.len() != 3 {
            return Err(ExtractError::MalformedInput {
                reason: format!("expected 3 columns, found {}", record.len()),
            });
        }
        rows.push((
            record[0].to_string(),
            record[1].to_string(),
            record[2].to_string(),
        ));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmailAddress, ExtractionResult, Provenance};

    fn result_of(addresses: &[(&str, Provenance)]) -> ExtractionResult {
        let mut result = ExtractionResult::new();
        for (address, provenance) in addresses {
            result.insert(EmailAddress::parse(address).unwrap(), *provenance);
        }
        result
    }

    #[test]
    fn test_header_and_rows() {
        let result = result_of(&[
            ("ada@example.com", Provenance::Pattern),
            ("grace@navy.mil", Provenance::Api),
        ]);

        let bytes = export_csv(&result);
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "email,domain,provenance");
        assert_eq!(lines[1], "ada@example.com,example.com,pattern");
        assert_eq!(lines[2], "grace@navy.mil,navy.mil,api");
    }

    #[test]
    fn test_empty_result_exports_header_only() {
        let bytes = export_csv(&ExtractionResult::new());
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.trim(), "email,domain,provenance");
    }

    #[test]
    fn test_round_trip_preserves_order_and_set() {
        let result = result_of(&[
            ("c@z.com", Provenance::Pattern),
            ("a@y.org", Provenance::Api),
            ("b@x.net", Provenance::Pattern),
        ]);

        let rows = parse_exported(&export_csv(&result)).unwrap();
        let emails: Vec<&str> = rows.iter().map(|(email, _, _)| email.as_str()).collect();
        assert_eq!(emails, vec!["c@z.com", "a@y.org", "b@x.net"]);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_exported(b"email,domain\na@b.com,b.com\n").is_err());
    }
}
