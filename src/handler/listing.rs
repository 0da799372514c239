//! Directory listing module
//!
//! Renders a directory as the HTML control page: one row per entry with a
//! download link and a delete button, plus the upload form.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::handler::template;
use crate::http::response;

/// Serve the listing page for `dir`, or 404 when it cannot be read.
pub async fn serve_listing(dir: &Path, is_head: bool) -> Response<Full<Bytes>> {
    match read_entry_names(dir).await {
        Ok(names) => {
            let html = template::render_listing_page(&render_rows(&names));
            response::build_html_response(html, is_head)
        }
        Err(_) => response::build_404_response("No permission to list directory"),
    }
}

/// Entry names in whatever order the filesystem returns them.
async fn read_entry_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// One table row per entry. The download href carries the percent-encoded
/// name; the delete button gets the raw name, which the page script encodes
/// into the query itself.
fn render_rows(names: &[String]) -> String {
    let mut rows = String::new();
    for name in names {
        let encoded = urlencoding::encode(name);
        rows.push_str(&format!(
            "            <tr>\n                <td><a href=\"{encoded}\" download>{name}</a></td>\n                <td><button onclick=\"deleteFile('{name}')\">Delete</button></td>\n            </tr>\n"
        ));
    }
    rows
}
