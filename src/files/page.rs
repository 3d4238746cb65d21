//! The files query and the shape of one page of its response.

use serde::Deserialize;

use crate::files::FileRecord;

/// Number of files requested per page.
pub const PAGE_SIZE: usize = 250;

/// Query for one page of files. Only media images and generic files carry
/// a URL; other node types come back as empty objects.
pub const FILES_QUERY: &str = r"
query getFiles($cursor: String) {
  files(first: 250, after: $cursor) {
    edges {
      node {
        ... on MediaImage {
          image { url }
        }
        ... on GenericFile {
          url
        }
      }
    }
    pageInfo {
      hasNextPage
      endCursor
    }
  }
}
";

/// `data` of a files query response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FilesData {
    #[serde(default)]
    pub files: Option<FilesConnection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FilesConnection {
    #[serde(default)]
    pub edges: Vec<FileEdge>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileEdge {
    #[serde(default)]
    pub node: Option<FileNode>,
}

/// A node from either fragment. Both fields are absent for other file
/// types.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FileNode {
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageRef {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageInfo {
    #[serde(rename = "hasNextPage", default)]
    pub has_next_page: bool,
    #[serde(rename = "endCursor", default)]
    pub end_cursor: Option<String>,
}

impl FileNode {
    /// Converts the node to a record. The image URL wins over the direct
    /// URL; nodes with neither (or only empty strings) yield `None`.
    pub(crate) fn into_record(self) -> Option<FileRecord> {
        let image_url = self.image.and_then(|image| image.url);
        [image_url, self.url]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .map(FileRecord::from_url)
    }
}

impl FilesConnection {
    /// Records on this page, in edge order, and the page envelope if sent.
    pub(crate) fn records(self) -> (Vec<FileRecord>, Option<PageInfo>) {
        let records = self
            .edges
            .into_iter()
            .filter_map(|edge| edge.node)
            .filter_map(FileNode::into_record)
            .collect();
        (records, self.page_info)
    }
}
