use crate::error::{ExportError, Result};
use serde::Deserialize;

/// On-disk shape of a Chromium-family `Bookmarks` file. Only the fields
/// the exporter reads are declared; everything else in the file (checksum,
/// guids, sync metadata, the "other" and "synced" roots) is ignored.
#[derive(Debug, Deserialize)]
pub struct RawBookmarkFile {
    pub roots: RawRoots,
}

#[derive(Debug, Deserialize)]
pub struct RawRoots {
    pub bookmark_bar: Option<RawNode>,
}

#[derive(Debug, Deserialize)]
pub struct RawNode {
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub date_added: Option<String>,
    pub children: Option<Vec<RawNode>>,
}

/// A bookmark tree node. The variant is decided once, when the raw tree is
/// converted, so the renderer dispatches on a closed enum instead of
/// re-checking type strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkNode {
    Url {
        name: String,
        url: String,
        /// Opaque browser timestamp, passed through unmodified
        date_added: String,
    },
    Folder {
        name: String,
        children: Vec<BookmarkNode>,
    },
    /// A node whose `type` is neither "url" nor "folder", or a url node
    /// missing its name or url. Skipped by the renderer.
    Unknown,
}

impl BookmarkNode {
    fn from_raw(raw: RawNode) -> Self {
        match raw.node_type.as_str() {
            "url" => match (raw.name, raw.url) {
                (Some(name), Some(url)) => BookmarkNode::Url {
                    name,
                    url,
                    date_added: raw.date_added.unwrap_or_default(),
                },
                _ => BookmarkNode::Unknown,
            },
            "folder" => BookmarkNode::Folder {
                name: raw.name.unwrap_or_default(),
                children: raw
                    .children
                    .unwrap_or_default()
                    .into_iter()
                    .map(BookmarkNode::from_raw)
                    .collect(),
            },
            _ => BookmarkNode::Unknown,
        }
    }
}

/// The bookmark-bar tree of one `Bookmarks` file. Other roots are not
/// exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkDocument {
    pub bookmark_bar: Vec<BookmarkNode>,
}

impl BookmarkDocument {
    /// Convert the raw serde tree, keeping only the bookmark bar.
    /// Child order is preserved exactly as encountered in the source.
    pub fn from_raw(raw: RawBookmarkFile) -> Result<Self> {
        let bar = raw
            .roots
            .bookmark_bar
            .ok_or_else(|| ExportError::SourceParse("missing roots.bookmark_bar".to_string()))?;
        let children = bar.children.ok_or_else(|| {
            ExportError::SourceParse("missing roots.bookmark_bar.children".to_string())
        })?;
        Ok(Self {
            bookmark_bar: children.into_iter().map(BookmarkNode::from_raw).collect(),
        })
    }

    /// Number of URL entries reachable from the bookmark bar
    pub fn url_count(&self) -> usize {
        count_nodes(&self.bookmark_bar).0
    }

    /// Number of folders reachable from the bookmark bar
    pub fn folder_count(&self) -> usize {
        count_nodes(&self.bookmark_bar).1
    }
}

fn count_nodes(nodes: &[BookmarkNode]) -> (usize, usize) {
    let mut urls = 0;
    let mut folders = 0;
    for node in nodes {
        match node {
            BookmarkNode::Url { .. } => urls += 1,
            BookmarkNode::Folder { children, .. } => {
                folders += 1;
                let (u, f) = count_nodes(children);
                urls += u;
                folders += f;
            }
            BookmarkNode::Unknown => {}
        }
    }
    (urls, folders)
}
