use crate::results::PageResult;
use crate::writers::ExportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pretty-prints the results as a JSON array (two-space indent, UTF-8 kept unescaped)
pub fn write<W: Write>(writer: W, results: &[PageResult]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}

/// Writes the JSON export to `path`, truncating any existing file
pub fn write_file(path: &Path, results: &[PageResult]) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer, results)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{Heading, HeadingLevel, PageInventory};

    #[test]
    fn test_pretty_output_keeps_non_ascii() {
        let inventory = PageInventory {
            page_title: "Übersicht".to_string(),
            headings: vec![Heading {
                level: HeadingLevel::H1,
                text: "Résumé 2024".to_string(),
                id: String::new(),
            }],
            ..PageInventory::default()
        };
        let results = vec![PageResult::success("https://example.com/", inventory)];

        let mut buf = Vec::new();
        write(&mut buf, &results).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.starts_with("[\n  {\n    \"url\": \"https://example.com/\""));
        assert!(output.contains("Übersicht"));
        assert!(output.contains("Résumé 2024"));
        assert!(!output.contains("\\u"));
    }

    #[test]
    fn test_empty_results() {
        let mut buf = Vec::new();
        write(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]");
    }

    #[test]
    fn test_write_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "stale content that is longer than the export").unwrap();

        let results = vec![PageResult::failed("https://example.com/x", "boom")];
        write_file(&path, &results).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(1));
        assert_eq!(value[0]["error"], "boom");
    }
}
