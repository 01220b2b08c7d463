//! CSV export of flagged resources.

use crate::config::CSV_HEADER;
use crate::error::{ClickOpsError, Result};
use crate::processing::Classification;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

const LINE_END: &str = "\r\n";

/// Create or truncate the export file at the start of a run.
pub fn create_output_file(path: &Path) -> Result<()> {
    File::create(path).map_err(|source| ClickOpsError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Created CSV output file {}", path.display());
    Ok(())
}

/// Append one row per flagged resource to `path`.
///
/// The header is written only while the file is still empty, so successive
/// subscriptions share one header. The file is closed before returning.
///
/// # Returns
/// * `Ok(usize)` - Number of data rows written
pub fn export_csv(flagged: &[Classification], path: &Path, subscription_name: &str) -> Result<usize> {
    write_rows(flagged, path, subscription_name).map_err(|source| ClickOpsError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn write_rows(
    flagged: &[Classification],
    path: &Path,
    subscription_name: &str,
) -> std::io::Result<usize> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let is_empty = file.metadata()?.len() == 0;
    let mut writer = BufWriter::new(file);

    if is_empty {
        write_record(&mut writer, &CSV_HEADER)?;
    }

    for c in flagged {
        let r = c.resource;
        let tags = r.tags_joined("=", "; ").unwrap_or_else(|| "No tags".to_string());
        let reasons = c.reasons.join("; ");
        write_record(
            &mut writer,
            &[
                subscription_name,
                r.name.as_str(),
                r.resource_type.as_str(),
                r.resource_group.as_str(),
                tags.as_str(),
                r.created_time_or_unknown(),
                reasons.as_str(),
            ],
        )?;
    }
    writer.flush()?;
    log::debug!("Wrote {} CSV rows to {}", flagged.len(), path.display());
    Ok(flagged.len())
}

fn write_record<W: Write>(writer: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(|f| escape_csv_field(f))
        .collect::<Vec<String>>()
        .join(",");
    write!(writer, "{line}{LINE_END}")
}

/// Quote a field if it holds a comma, quote or line break; inner quotes are doubled.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains([',', '"', '\r', '\n']) {
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceRecord;
    use crate::processing::classify;

    fn record(name: &str, tags: &[(&str, &str)]) -> ResourceRecord {
        ResourceRecord {
            name: name.to_string(),
            resource_type: "Microsoft.Compute/disks".to_string(),
            resource_group: "rg-1".to_string(),
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            provisioning_state: Some("Succeeded".to_string()),
            ..Default::default()
        }
    }

    /// Minimal RFC 4180 reader for checking what we wrote.
    fn parse_csv(text: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut quoted = false;
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match (ch, quoted) {
                ('"', true) if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                ('"', _) => quoted = !quoted,
                (',', false) => row.push(std::mem::take(&mut field)),
                ('\r', false) => {}
                ('\n', false) => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                (c, _) => field.push(c),
            }
        }
        rows
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_csv_field("a; b"), "a; b");
    }

    #[test]
    fn test_header_once_across_subscriptions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        create_output_file(&path).expect("create");

        let first = [record("disk-1", &[]), record("disk-2", &[("owner", "a, b")])];
        let second = [record("disk-3", &[("team", "x"), ("cost", "1")])];
        let first: Vec<_> = first.iter().map(classify).collect();
        let second: Vec<_> = second.iter().map(classify).collect();

        assert_eq!(export_csv(&first, &path, "prod").expect("write 1"), 2);
        assert_eq!(export_csv(&second, &path, "dev").expect("write 2"), 1);

        let text = std::fs::read_to_string(&path).expect("read back");
        let rows = parse_csv(&text);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], CSV_HEADER.to_vec());
        assert_eq!(rows.iter().filter(|r| r[0] == "Subscription").count(), 1);
        assert!(rows.iter().all(|r| r.len() == 7));

        assert_eq!(rows[1][0], "prod");
        assert_eq!(rows[1][4], "No tags");
        assert_eq!(rows[1][5], "Unknown");
        assert_eq!(
            rows[1][6],
            "Resource has no tags; Resource was provisioned without automation tags"
        );
        assert_eq!(rows[2][4], "owner=a, b");
        assert_eq!(rows[3][0], "dev");
        assert_eq!(rows[3][4], "team=x; cost=1");
    }

    #[test]
    fn test_create_truncates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale\r\n").expect("seed");
        create_output_file(&path).expect("create");
        assert_eq!(std::fs::metadata(&path).expect("meta").len(), 0);
    }

    #[test]
    fn test_create_in_missing_dir_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no-such-dir").join("out.csv");
        assert!(matches!(
            create_output_file(&path),
            Err(ClickOpsError::OutputCreate { .. })
        ));
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        // a directory cannot be opened for appending
        let err = export_csv(&[], dir.path(), "prod").expect_err("path is a directory");
        assert!(matches!(err, ClickOpsError::OutputWrite { .. }));
        assert!(!err.is_fatal());
    }
}
