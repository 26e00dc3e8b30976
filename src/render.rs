use crate::models::{BookmarkDocument, BookmarkNode};

/// Render a bookmark document as a complete Netscape Bookmark File.
///
/// The header text and tag casing are what browser importers expect; they
/// must not be altered. Values are interpolated verbatim, without HTML
/// escaping, to keep the output byte-compatible with what the browsers
/// themselves emit on export.
pub fn render_document(doc: &BookmarkDocument) -> String {
    let mut buf = String::new();
    buf.push_str("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n");
    buf.push_str("<!-- This is an automatically generated file.\n");
    buf.push_str("     It will be read and overwritten.\n");
    buf.push_str("     DO NOT EDIT! -->\n");
    buf.push_str("<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n");
    buf.push_str("<TITLE>Bookmarks</TITLE>\n");
    buf.push_str("<H1>Bookmarks</H1>\n");
    buf.push_str("<DL><p>\n");
    for node in &doc.bookmark_bar {
        render_node(&mut buf, node);
    }
    buf.push_str("</DL><p>\n");
    buf
}

fn render_node(buf: &mut String, node: &BookmarkNode) {
    match node {
        BookmarkNode::Url {
            name,
            url,
            date_added,
        } => render_url_entry(buf, name, url, date_added),
        BookmarkNode::Folder { name, children } => render_folder(buf, name, children),
        BookmarkNode::Unknown => {}
    }
}

fn render_url_entry(buf: &mut String, name: &str, url: &str, date_added: &str) {
    buf.push_str(&format!(
        "<DT><A HREF=\"{}\" ADD_DATE=\"{}\">{}</A>\n",
        url, date_added, name
    ));
}

/// An empty folder still emits its `<DL><p>`/`</DL><p>` pair.
fn render_folder(buf: &mut String, name: &str, children: &[BookmarkNode]) {
    buf.push_str(&format!("<DT><H3>{}</H3>\n", name));
    buf.push_str("<DL><p>\n");
    for child in children {
        render_node(buf, child);
    }
    buf.push_str("</DL><p>\n");
}
