//! Target-locator parsing: document URL → service-level spreadsheet id

use crate::error::{Result, SheetsError};

/// Split a URL path into segments the way .NET's `Uri.Segments` does:
/// the leading `/` is its own segment and every intermediate segment keeps
/// its trailing `/`.
fn path_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, byte) in path.bytes().enumerate() {
        if byte == b'/' {
            segments.push(&path[start..=i]);
            start = i + 1;
        }
    }
    if start < path.len() {
        segments.push(&path[start..]);
    }
    segments
}

/// Parse a spreadsheet URL into the document id the service API expects.
///
/// The URL must look like `https://<host>/spreadsheets/d/<id>[/...]`:
/// at least 4 path segments, the second being `spreadsheets/`
/// (case-insensitive); the id is the fourth segment with any trailing
/// slash removed. Malformed input fails with a descriptive error before
/// any remote call is made.
pub fn parse_spreadsheet_id(target: &str) -> Result<String> {
    let url = reqwest::Url::parse(target)
        .map_err(|e| SheetsError::InvalidTarget(format!("\"{target}\" is not a valid URL: {e}")))?;

    let segments = path_segments(url.path());
    if segments.len() < 4 {
        return Err(SheetsError::InvalidTarget(format!(
            "\"{target}\" does not contain a spreadsheet document path"
        )));
    }
    if !segments[1].eq_ignore_ascii_case("spreadsheets/") {
        return Err(SheetsError::InvalidTarget(format!(
            "\"{target}\" is not a spreadsheet URL"
        )));
    }

    let id = segments[3].trim_end_matches('/');
    if id.is_empty() {
        return Err(SheetsError::InvalidTarget(format!(
            "\"{target}\" has an empty document id"
        )));
    }

    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_match_dotnet_shape() {
        assert_eq!(
            path_segments("/spreadsheets/d/abc123/edit"),
            vec!["/", "spreadsheets/", "d/", "abc123/", "edit"]
        );
        assert_eq!(path_segments("/"), vec!["/"]);
    }

    #[test]
    fn parses_document_id() {
        let id =
            parse_spreadsheet_id("https://docs.google.com/spreadsheets/d/abc123/edit#gid=0")
                .unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let id = parse_spreadsheet_id("https://docs.google.com/spreadsheets/d/abc123/").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn second_segment_is_case_insensitive() {
        let id = parse_spreadsheet_id("https://docs.google.com/SPREADSHEETS/d/abc123").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn too_few_segments_rejected() {
        let err = parse_spreadsheet_id("https://docs.google.com/spreadsheets").unwrap_err();
        assert!(matches!(err, SheetsError::InvalidTarget(_)));

        let err = parse_spreadsheet_id("https://docs.google.com/").unwrap_err();
        assert!(matches!(err, SheetsError::InvalidTarget(_)));
    }

    #[test]
    fn wrong_second_segment_rejected() {
        let err =
            parse_spreadsheet_id("https://docs.google.com/documents/d/abc123/edit").unwrap_err();
        assert!(matches!(err, SheetsError::InvalidTarget(_)));
    }

    #[test]
    fn garbage_is_an_error_not_a_panic() {
        assert!(parse_spreadsheet_id("not a url").is_err());
        assert!(parse_spreadsheet_id("").is_err());
    }
}
