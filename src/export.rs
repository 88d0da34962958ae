//! Name list I/O: CSV export/import, the comma-joined copy line, and
//! search links.
//!
//! The CSV layout is a single column with the header `Name` followed by one
//! name per row, in list order. Import skips the header and empty rows and
//! takes the first column of every other row, trimmed.

use crate::error::NameSiftError;
use crate::names::NameList;
use reqwest::Url;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Header of the single CSV column.
pub const CSV_HEADER: &str = "Name";

const SEARCH_BASE: &str = "https://www.google.com/search";

/// Write `names` as CSV to `writer`.
pub fn write_csv<W: Write>(writer: W, names: &NameList) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([CSV_HEADER])?;
    for name in names {
        wtr.write_record([name.trim()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a name list previously written by [`write_csv`] (or any CSV whose
/// first row is a header and whose first column holds names).
pub fn read_csv<R: Read>(reader: R) -> Result<NameList, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut names = NameList::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(first) = record.get(0) {
            names.push(first);
        }
    }
    Ok(names)
}

/// Write `names` to `path`, creating parent directories.
pub fn save_csv(path: impl AsRef<Path>, names: &NameList) -> Result<(), NameSiftError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| NameSiftError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let file = std::fs::File::create(path).map_err(|e| NameSiftError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_csv(file, names).map_err(|e| csv_error(path, e))?;

    info!("Names saved to '{}'.", path.display());
    Ok(())
}

/// Load a name list from the CSV file at `path`.
pub fn load_csv(path: impl AsRef<Path>) -> Result<NameList, NameSiftError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NameSiftError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            csv_error(path, csv::Error::from(e))
        }
    })?;
    let names = read_csv(file).map_err(|e| csv_error(path, e))?;
    info!("Loaded {} names from '{}'", names.len(), path.display());
    Ok(names)
}

/// First `namesN.csv` (N = 1, 2, …) that does not yet exist in `dir`.
pub fn next_export_path(dir: impl AsRef<Path>) -> PathBuf {
    let dir = dir.as_ref();
    let mut i = 1u32;
    loop {
        let candidate = dir.join(format!("names{}.csv", i));
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}

/// Names joined with `,`, the form shown to users and copied to clipboards.
pub fn copy_line(names: &NameList) -> String {
    names.as_slice().join(",")
}

/// Parse a user-typed comma-separated list of names.
pub fn parse_name_line(line: &str) -> NameList {
    line.split(',').collect()
}

/// One web-search URL per name for `"{name} {query}"`.
///
/// # Errors
/// `InvalidInput` when `names` is empty or `query` is blank.
pub fn search_urls(names: &NameList, query: &str) -> Result<Vec<Url>, NameSiftError> {
    let query = query.trim();
    if names.is_empty() || query.is_empty() {
        return Err(NameSiftError::InvalidInput {
            reason: "Please enter both names and follow-up query.".into(),
        });
    }

    names
        .iter()
        .map(|name| {
            Url::parse_with_params(SEARCH_BASE, [("q", format!("{} {}", name, query))])
                .map_err(|e| NameSiftError::Internal(e.to_string()))
        })
        .collect()
}

fn csv_error(path: &Path, e: csv::Error) -> NameSiftError {
    NameSiftError::CsvFailed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NameList {
        ["Alice Smith", "Bob Jones", "Carol de la Cruz"]
            .into_iter()
            .collect()
    }

    #[test]
    fn csv_layout() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Name\nAlice Smith\nBob Jones\nCarol de la Cruz\n"
        );
    }

    #[test]
    fn csv_quotes_commas() {
        let names: NameList = ["Smith, Alice"].into_iter().collect();
        let mut buf = Vec::new();
        write_csv(&mut buf, &names).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "Name\n\"Smith, Alice\"\n");
        assert_eq!(read_csv(buf.as_slice()).unwrap(), ["Smith, Alice"]);
    }

    #[test]
    fn read_skips_header_blank_rows_and_extra_columns() {
        let input = "Name,Role\n  Ada Lovelace ,mentor\n\nAlan Turing\n";
        let names = read_csv(input.as_bytes()).unwrap();
        assert_eq!(names, ["Ada Lovelace", "Alan Turing"]);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/names.csv");
        save_csv(&path, &sample()).unwrap();
        assert_eq!(load_csv(&path).unwrap(), sample());
    }

    #[test]
    fn load_missing_file() {
        let err = load_csv("/no/such/names.csv").unwrap_err();
        assert!(matches!(err, NameSiftError::FileNotFound { .. }));
    }

    #[test]
    fn export_path_increments() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(next_export_path(dir.path()), dir.path().join("names1.csv"));
        std::fs::write(dir.path().join("names1.csv"), "Name\n").unwrap();
        std::fs::write(dir.path().join("names2.csv"), "Name\n").unwrap();
        assert_eq!(next_export_path(dir.path()), dir.path().join("names3.csv"));
    }

    #[test]
    fn copy_line_joins_with_commas() {
        assert_eq!(copy_line(&sample()), "Alice Smith,Bob Jones,Carol de la Cruz");
        assert_eq!(copy_line(&NameList::new()), "");
    }

    #[test]
    fn parse_name_line_trims_and_drops_empty() {
        let names = parse_name_line(" Ada Lovelace ,, Plato,Ada Lovelace");
        assert_eq!(names, ["Ada Lovelace", "Plato"]);
    }

    #[test]
    fn search_urls_encode_query() {
        let names: NameList = ["Ada Lovelace", "Jürgen Schmidhuber"].into_iter().collect();
        let urls = search_urls(&names, "linkedin & github").unwrap();
        assert_eq!(urls.len(), 2);
        assert_eq!(
            urls[0].as_str(),
            "https://www.google.com/search?q=Ada+Lovelace+linkedin+%26+github"
        );
        let q: Vec<_> = urls[1].query_pairs().collect();
        assert_eq!(q[0].1, "Jürgen Schmidhuber linkedin & github");
    }

    #[test]
    fn search_requires_names_and_query() {
        assert!(search_urls(&NameList::new(), "github").is_err());
        assert!(search_urls(&sample(), "   ").is_err());
    }
}
