//! Ad hoc multipart/form-data parsing module
//!
//! Splits the raw body on the boundary delimiter and pulls out the first
//! file-bearing part. Known-fragile on bodies whose content contains the
//! boundary bytes; kept behind this interface so a standards-compliant
//! parser can replace it without touching the handlers.

/// One extracted file part: the client-supplied name and the raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Extract the boundary token from a Content-Type header value.
///
/// The token is whatever follows the last `boundary=`; quoted boundaries
/// and trailing parameters are not handled.
pub fn boundary(content_type: &str) -> Option<&str> {
    content_type
        .rfind("boundary=")
        .map(|at| &content_type[at + "boundary=".len()..])
}

/// Extract the first part carrying a `filename=` attribute.
///
/// The body is split on `--<boundary>`. A part qualifies when it contains a
/// `Content-Disposition` line whose tail after the last `filename=` names
/// the file (surrounding quote characters stripped). Content runs from the
/// first blank line — the whole part when there is none — to the final
/// `\r\n`. Parts without `filename=` (plain form fields) are skipped, and
/// any parts after the first hit are ignored.
pub fn extract_file_part(body: &[u8], boundary: &str) -> Option<FilePart> {
    let delimiter = format!("--{boundary}").into_bytes();

    for part in split_on(body, &delimiter) {
        let Some(disposition) = disposition_line(part) else {
            continue;
        };
        let Some(at) = rfind(disposition, b"filename=") else {
            continue;
        };

        let raw_name = trim_quotes(&disposition[at + b"filename=".len()..]);
        let filename = String::from_utf8(raw_name.to_vec()).ok()?;

        return Some(FilePart {
            filename,
            content: part_content(part).to_vec(),
        });
    }

    None
}

/// First line of the part that contains a Content-Disposition header.
fn disposition_line(part: &[u8]) -> Option<&[u8]> {
    split_on(part, b"\r\n").find(|line| find(line, b"Content-Disposition").is_some())
}

/// Everything between the first `\r\n\r\n` and the final `\r\n`.
fn part_content(part: &[u8]) -> &[u8] {
    let after = match find(part, b"\r\n\r\n") {
        Some(at) => &part[at + b"\r\n\r\n".len()..],
        None => part,
    };
    match rfind(after, b"\r\n") {
        Some(at) => &after[..at],
        None => after,
    }
}

fn trim_quotes(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| b != b'"')
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| b != b'"')
        .map_or(start, |at| at + 1);
    &bytes[start..end]
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// Byte-slice equivalent of `str::split`: the segments between occurrences
/// of `delimiter`. The delimiter must be non-empty.
fn split_on<'a>(haystack: &'a [u8], delimiter: &'a [u8]) -> SplitBytes<'a> {
    SplitBytes {
        rest: Some(haystack),
        delimiter,
    }
}

struct SplitBytes<'a> {
    rest: Option<&'a [u8]>,
    delimiter: &'a [u8],
}

impl<'a> Iterator for SplitBytes<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match find(rest, self.delimiter) {
            Some(at) => {
                self.rest = Some(&rest[at + self.delimiter.len()..]);
                Some(&rest[..at])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY: &str = "----WebKitFormBoundaryA7cd9z";

    /// Assemble a multipart body from (filename, content) pairs the way a
    /// browser's FormData would.
    fn multipart_body(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (filename, content) in files {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
                    .as_bytes(),
            );
            body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    #[test]
    fn test_boundary_extraction() {
        assert_eq!(
            boundary("multipart/form-data; boundary=----WebKitFormBoundaryA7cd9z"),
            Some("----WebKitFormBoundaryA7cd9z")
        );
        assert_eq!(boundary("text/plain"), None);
        assert_eq!(boundary("multipart/form-data; boundary="), Some(""));
    }

    #[test]
    fn test_extracts_single_file() {
        let body = multipart_body(&[("test.txt", b"hello")]);
        let part = extract_file_part(&body, BOUNDARY).expect("file part");
        assert_eq!(part.filename, "test.txt");
        assert_eq!(part.content, b"hello");
    }

    #[test]
    fn test_first_file_wins() {
        let body = multipart_body(&[("a.txt", b"first"), ("b.txt", b"second")]);
        let part = extract_file_part(&body, BOUNDARY).expect("file part");
        assert_eq!(part.filename, "a.txt");
        assert_eq!(part.content, b"first");
    }

    #[test]
    fn test_plain_field_skipped() {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"comment\"\r\n\r\n");
        body.extend_from_slice(b"just a field\r\n");
        body.extend_from_slice(&multipart_body(&[("real.bin", b"\x00\x01\x02")]));

        let part = extract_file_part(&body, BOUNDARY).expect("file part");
        assert_eq!(part.filename, "real.bin");
        assert_eq!(part.content, b"\x00\x01\x02");
    }

    #[test]
    fn test_no_file_part() {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"comment\"\r\n\r\n");
        body.extend_from_slice(b"no file here\r\n");
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        assert_eq!(extract_file_part(&body, BOUNDARY), None);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(extract_file_part(b"", BOUNDARY), None);
    }

    #[test]
    fn test_content_keeps_interior_crlf() {
        let body = multipart_body(&[("lines.txt", b"line one\r\nline two")]);
        let part = extract_file_part(&body, BOUNDARY).expect("file part");
        assert_eq!(part.content, b"line one\r\nline two");
    }

    #[test]
    fn test_unquoted_filename() {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"file\"; filename=bare.txt\r\n\r\n");
        body.extend_from_slice(b"data\r\n");
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let part = extract_file_part(&body, BOUNDARY).expect("file part");
        assert_eq!(part.filename, "bare.txt");
    }

    #[test]
    fn test_empty_file_content() {
        let body = multipart_body(&[("empty.txt", b"")]);
        let part = extract_file_part(&body, BOUNDARY).expect("file part");
        assert_eq!(part.filename, "empty.txt");
        assert_eq!(part.content, b"");
    }

    #[test]
    fn test_unsplit_body_still_scanned() {
        // A boundary that never occurs leaves one giant part; the scan still
        // finds the disposition line and the content runs to the last CRLF,
        // swallowing the closing delimiter. Fragility of the split algorithm,
        // locked in on purpose.
        let body = multipart_body(&[("test.txt", b"hello")]);
        let part = extract_file_part(&body, "some-other-boundary").expect("file part");
        assert_eq!(part.filename, "test.txt");
        assert!(part.content.starts_with(b"hello"));
        assert!(part.content.ends_with(b"--"));
    }
}
