//! Tests for CSV parsing, cell type inference and column lookup

#[cfg(test)]
mod tests {
    use patternrank::PatternError;
    use patternrank::io::dataset::{Cell, Dataset};
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    // Tests that integers, floats, text and missing markers are told apart
    #[test]
    fn test_cell_inference() {
        assert_eq!(Cell::parse("42"), Cell::Integer(42));
        assert_eq!(Cell::parse("-7"), Cell::Integer(-7));
        assert_eq!(Cell::parse(" 3 "), Cell::Integer(3));
        assert_eq!(Cell::parse("2.5"), Cell::Float(2.5));
        assert_eq!(Cell::parse("1e3"), Cell::Float(1000.0));
        assert_eq!(Cell::parse("abc"), Cell::Text("abc".to_string()));
        assert_eq!(Cell::parse(""), Cell::Missing);
        assert_eq!(Cell::parse("NA"), Cell::Missing);
        assert_eq!(Cell::parse("NaN"), Cell::Missing);
    }

    // Tests float equality treats signed zeros and NaNs as equal for counting
    #[test]
    fn test_float_equality_and_hashing() {
        assert_eq!(Cell::Float(0.0), Cell::Float(-0.0));
        assert_eq!(Cell::Float(f64::NAN), Cell::Float(f64::NAN));
        assert_ne!(Cell::Float(1.0), Cell::Integer(1));
        assert_ne!(Cell::Text("1".to_string()), Cell::Integer(1));

        let mut set = HashSet::new();
        set.insert(Cell::Float(0.0));
        set.insert(Cell::Float(-0.0));
        set.insert(Cell::Float(f64::NAN));
        set.insert(Cell::Float(f64::NAN));
        assert_eq!(set.len(), 2);
    }

    // Tests cell rendering
    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Integer(5).to_string(), "5");
        assert_eq!(Cell::Float(1.0).to_string(), "1.0");
        assert_eq!(Cell::Float(2.5).to_string(), "2.5");
        assert_eq!(Cell::Text("up".to_string()).to_string(), "up");
        assert_eq!(Cell::Missing.to_string(), "nan");
    }

    // Tests shape, header names and column extraction
    #[test]
    fn test_parse_basic_table() {
        let dataset = Dataset::from_csv_str("id,value\n1,a\n2,b\n3,a\n").unwrap();

        assert_eq!(dataset.shape(), (3, 2));
        assert_eq!(dataset.column_names(), ["id", "value"]);
        assert!(dataset.path().is_none());
        assert_eq!(
            dataset.column("id").unwrap(),
            [Cell::Integer(1), Cell::Integer(2), Cell::Integer(3)]
        );
        assert_eq!(
            dataset.column("value").unwrap(),
            [
                Cell::Text("a".to_string()),
                Cell::Text("b".to_string()),
                Cell::Text("a".to_string())
            ]
        );
    }

    // Tests quoted fields with delimiters, escaped quotes and embedded newlines
    #[test]
    fn test_quoted_fields() {
        let text = "name,note\n\"Smith, J\",\"said \"\"hi\"\"\"\nplain,\"two\nlines\"\n";
        let dataset = Dataset::from_csv_str(text).unwrap();

        assert_eq!(dataset.shape(), (2, 2));
        assert_eq!(
            dataset.column("name").unwrap(),
            [
                Cell::Text("Smith, J".to_string()),
                Cell::Text("plain".to_string())
            ]
        );
        assert_eq!(
            dataset.column("note").unwrap(),
            [
                Cell::Text("said \"hi\"".to_string()),
                Cell::Text("two\nlines".to_string())
            ]
        );
    }

    // Tests CRLF endings, blank lines and a missing trailing newline
    #[test]
    fn test_line_endings_and_blank_lines() {
        let dataset = Dataset::from_csv_str("a,b\r\n1,2\r\n\r\n3,4").unwrap();

        assert_eq!(dataset.shape(), (2, 2));
        assert_eq!(
            dataset.column("b").unwrap(),
            [Cell::Integer(2), Cell::Integer(4)]
        );
    }

    // Tests that short records are padded with missing cells
    #[test]
    fn test_short_record_is_padded() {
        let dataset = Dataset::from_csv_str("a,b,c\n1\n2,3,4\n").unwrap();

        assert_eq!(
            dataset.column("c").unwrap(),
            [Cell::Missing, Cell::Integer(4)]
        );
    }

    // Tests a leading byte order mark is not part of the first header name
    #[test]
    fn test_byte_order_mark_is_stripped() {
        let dataset = Dataset::from_csv_str("\u{feff}value,other\n1,x\n2,y\n1,x\n").unwrap();

        assert_eq!(dataset.column_names(), ["value", "other"]);
        assert_eq!(
            dataset.column("value").unwrap(),
            [Cell::Integer(1), Cell::Integer(2), Cell::Integer(1)]
        );
    }

    // Tests a quoted empty field in a single-column file is a missing row, not a blank line
    #[test]
    fn test_quoted_empty_row_is_kept() {
        let dataset = Dataset::from_csv_str("v\n1\n\"\"\n1\n\n\"\"").unwrap();

        assert_eq!(dataset.shape(), (4, 1));
        assert_eq!(
            dataset.column("v").unwrap(),
            [
                Cell::Integer(1),
                Cell::Missing,
                Cell::Integer(1),
                Cell::Missing
            ]
        );
    }

    // Tests every column stays in row order when many rows and columns are mixed
    #[test]
    fn test_columns_keep_row_order() {
        let dataset = Dataset::from_csv_str("a,b,c\n1,2,3\n4,,6\n7,8\n").unwrap();

        assert_eq!(dataset.shape(), (3, 3));
        assert_eq!(
            dataset.column("a").unwrap(),
            [Cell::Integer(1), Cell::Integer(4), Cell::Integer(7)]
        );
        assert_eq!(
            dataset.column("b").unwrap(),
            [Cell::Integer(2), Cell::Missing, Cell::Integer(8)]
        );
        assert_eq!(
            dataset.column("c").unwrap(),
            [Cell::Integer(3), Cell::Integer(6), Cell::Missing]
        );
    }

    // Tests that an over-long record reports its line and field counts
    #[test]
    fn test_long_record_is_malformed() {
        let error = Dataset::from_csv_str("a,b\n1,2\n3,4,5\n").unwrap_err();

        match error {
            PatternError::MalformedRecord {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => unreachable!("Expected MalformedRecord, got {other}"),
        }
    }

    // Tests that empty input and unterminated quotes fail to load
    #[test]
    fn test_unloadable_text() {
        assert!(matches!(
            Dataset::from_csv_str(""),
            Err(PatternError::DatasetLoad { .. })
        ));
        assert!(matches!(
            Dataset::from_csv_str("a\n\"open\n"),
            Err(PatternError::DatasetLoad { .. })
        ));
    }

    // Tests a header-only file has zero rows and empty columns
    #[test]
    fn test_header_only() {
        let dataset = Dataset::from_csv_str("a,b\n").unwrap();

        assert_eq!(dataset.shape(), (0, 2));
        assert!(dataset.column("a").unwrap().is_empty());
    }

    // Tests unknown column lookups list the available names
    #[test]
    fn test_column_not_found() {
        let dataset = Dataset::from_csv_str("x,y\n1,2\n").unwrap();
        let error = dataset.column("z").unwrap_err();

        match &error {
            PatternError::ColumnNotFound { column, available } => {
                assert_eq!(column, "z");
                assert_eq!(available, &["x".to_string(), "y".to_string()]);
            }
            other => unreachable!("Expected ColumnNotFound, got {other}"),
        }
        assert!(error.to_string().contains("x, y"));
    }

    // Tests loading from disk keeps the path and reports missing files
    #[test]
    fn test_from_csv_path() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.csv");
        fs::write(&file, "v\n1\n2\n").unwrap();

        let dataset = Dataset::from_csv_path(&file).unwrap();
        assert_eq!(dataset.path(), Some(file.as_path()));
        assert_eq!(dataset.shape(), (2, 1));

        let missing = Dataset::from_csv_path(temp_dir.path().join("absent.csv"));
        assert!(matches!(
            missing,
            Err(PatternError::FileSystem {
                operation: "read dataset",
                ..
            })
        ));
    }
}
