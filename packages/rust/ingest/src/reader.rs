//! Best-effort CSV reading.
//!
//! LinkedIn exports are plain CSVs with a header row. Description and
//! recommendation cells regularly contain quoted newlines, which the `csv`
//! reader handles. The reader is flexible about row width: short rows leave
//! the trailing columns absent so the mapper can default them.

use std::path::Path;

use tracing::{debug, warn};

use linkfolio_shared::{PortfolioError, RawRow, Result};

use crate::Category;

/// Read one category's rows from an export directory.
pub fn read_category(source_dir: &Path, category: Category) -> Vec<RawRow> {
    read_rows(&source_dir.join(category.file_name()))
}

/// Read a CSV file with a header row into raw rows.
///
/// A missing or unreadable file, or a parse error anywhere in the file,
/// yields an empty sequence with a warning. This matches the export
/// contract: absent data is absent data, not a failure.
pub fn read_rows(path: &Path) -> Vec<RawRow> {
    match try_read_rows(path) {
        Ok(rows) => {
            debug!(path = %path.display(), rows = rows.len(), "read export file");
            rows
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read export file, treating as empty");
            Vec::new()
        }
    }
}

fn try_read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| PortfolioError::csv(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| PortfolioError::csv(format!("bad header row: {e}")))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| PortfolioError::csv(format!("row {}: {e}", rows.len() + 1)))?;

        let mut row = RawRow::new();
        for (i, header) in headers.iter().enumerate() {
            if let Some(value) = record.get(i) {
                row.insert(header.to_string(), value.to_string());
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_rows_by_header() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_csv(
            tmp.path(),
            "Skills.csv",
            "Name,Endorsement Count\nAWS,20\nAnsible,12\n",
        );

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Name").unwrap(), "AWS");
        assert_eq!(rows[1].get("Endorsement Count").unwrap(), "12");
    }

    #[test]
    fn missing_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let rows = read_rows(&tmp.path().join("Positions.csv"));
        assert!(rows.is_empty());
    }

    #[test]
    fn quoted_multiline_cells_parse() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_csv(
            tmp.path(),
            "Positions.csv",
            "Title,Company Name,Description\nSRE,Example Corp,\"Ran the fleet.\nOn call weekly.\"\n",
        );

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].get("Description").unwrap(),
            "Ran the fleet.\nOn call weekly."
        );
    }

    #[test]
    fn short_rows_leave_columns_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_csv(
            tmp.path(),
            "Positions.csv",
            "Title,Company Name,Ended On\nSRE,Example Corp\n",
        );

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Title").unwrap(), "SRE");
        assert!(rows[0].get("Ended On").is_none());
    }

    #[test]
    fn unparseable_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        // Invalid UTF-8 in a data row poisons the whole file
        let path = tmp.path().join("Skills.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"Name,Endorsement Count\n\xff\xfe,1\n").unwrap();

        let rows = read_rows(&path);
        assert!(rows.is_empty());
    }

    #[test]
    fn read_category_joins_fixed_name() {
        let tmp = tempfile::tempdir().unwrap();
        write_csv(tmp.path(), "Education.csv", "School Name\nState University\n");

        let rows = read_category(tmp.path(), Category::Education);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("School Name").unwrap(), "State University");

        // Other categories are simply absent
        assert!(read_category(tmp.path(), Category::Projects).is_empty());
    }

    #[test]
    fn fixture_export_reads() {
        let rows = read_rows(Path::new("../../../fixtures/csv/Skills.csv"));
        assert!(!rows.is_empty());
        assert!(rows[0].contains_key("Name"));
    }
}
