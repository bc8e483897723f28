use crate::{Error, Result};

/// A CSV table loaded from object storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Parses comma-delimited bytes with a header row. Short records are
    /// padded with empty fields; records wider than the header are rejected.
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| Error::storage(format!("Failed to read dataset header: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            return Err(Error::storage("Dataset is empty"));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| Error::storage(format!("Failed to parse dataset: {}", e)))?;
            if record.len() > headers.len() {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                return Err(Error::storage(format!(
                    "Failed to parse dataset: record on line {} has {} fields, header has {}",
                    line,
                    record.len(),
                    headers.len()
                )));
            }

            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_headers_and_rows() {
        let csv = b"food,calories,protein\noats,389,16.9\n\"lentils, red\",352,24.6\n";
        let dataset = Dataset::from_csv(csv).unwrap();

        assert_eq!(dataset.headers, vec!["food", "calories", "protein"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.column_count(), 3);
        assert_eq!(dataset.rows[1], vec!["lentils, red", "352", "24.6"]);
    }

    #[test]
    fn test_header_only_dataset_has_no_rows() {
        let dataset = Dataset::from_csv(b"food,calories\n").unwrap();

        assert_eq!(dataset.column_count(), 2);
        assert_eq!(dataset.row_count(), 0);
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let err = Dataset::from_csv(b"").unwrap_err();

        assert!(matches!(err, Error::Storage(_)));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let dataset = Dataset::from_csv(b"food,calories,protein\noats\nrice,130\n").unwrap();

        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.rows[0], vec!["oats", "", ""]);
        assert_eq!(dataset.rows[1], vec!["rice", "130", ""]);
    }

    #[test]
    fn test_wide_rows_are_rejected() {
        let err = Dataset::from_csv(b"food,calories\noats,389\nrice,130,extra\n").unwrap_err();

        assert!(matches!(err, Error::Storage(_)));
        assert!(err.to_string().contains("Failed to parse dataset"));
        assert!(err.to_string().contains("line 3 has 3 fields"));
    }
}
