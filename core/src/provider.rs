use crate::error::{RecommendError, Result};
use crate::features::Item;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Read items from a `.json` file (array or single object) or a `.jsonl` file.
pub fn load_items_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let f = File::open(path)?;
    let items = if path.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        load_items_from_lines(BufReader::new(f))?
    } else {
        load_items_from_reader(BufReader::new(f))?
    };
    tracing::info!(path = %path.display(), items = items.len(), "loaded catalog items");
    Ok(items)
}

pub fn load_items_from_reader<R: Read>(mut reader: R) -> Result<Vec<Item>> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_items(&buf)
}

/// Parse a JSON array of items, or a single item object.
pub fn parse_items(s: &str) -> Result<Vec<Item>> {
    let json: serde_json::Value = serde_json::from_str(s)?;
    let items = match json {
        serde_json::Value::Array(arr) => {
            arr.into_iter().map(serde_json::from_value).collect::<std::result::Result<Vec<Item>, _>>()?
        }
        other => vec![serde_json::from_value(other)?],
    };
    Ok(items)
}

/// One item per line; blank lines are skipped. Line numbers in errors are 1-based.
pub fn load_items_from_lines<R: BufRead>(reader: R) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let item = serde_json::from_str(&line).map_err(|source| RecommendError::JsonLine { line: i + 1, source })?;
        items.push(item);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_with_optional_fields() {
        let items = parse_items(r#"[{"title":"A","keywords":"spy action"},{"title":"B","budget":5}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].keywords.as_deref(), Some("spy action"));
        assert_eq!(items[1].cast, None);
    }

    #[test]
    fn parses_single_object() {
        let items = parse_items(r#"{"title":"Solo","genres":"Drama"}"#).unwrap();
        assert_eq!(items, vec![Item::new("Solo").genres("Drama")]);
    }

    #[test]
    fn null_fields_are_absent() {
        let items = parse_items(r#"[{"title":"A","cast":null}]"#).unwrap();
        assert_eq!(items[0].cast, None);
    }

    #[test]
    fn missing_title_is_rejected() {
        let err = parse_items(r#"[{"keywords":"x"}]"#).unwrap_err();
        assert!(matches!(err, RecommendError::Json(_)));
    }

    #[test]
    fn lines_skip_blanks_and_report_line() {
        let input = "{\"title\":\"A\"}\n\n{\"title\":\"B\"}\n";
        let items = load_items_from_lines(input.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);

        let err = load_items_from_lines("{\"title\":\"A\"}\nnot json\n".as_bytes()).unwrap_err();
        assert!(matches!(err, RecommendError::JsonLine { line: 2, .. }));
    }
}
