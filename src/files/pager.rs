//! Cursor-driven paging over the files connection.

use crate::clients::{GraphqlClient, GraphqlError, HttpError, HttpResponse};
use crate::files::page::{FilesData, FILES_QUERY};
use crate::files::{CatalogError, FileRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
enum PagerState {
    /// No request made yet; the first request sends a null cursor.
    Start,
    /// More pages remain after this cursor.
    Fetching(String),
    Done,
    Failed,
}

/// Walks the files connection one page at a time.
///
/// Each call to [`next_page`](Self::next_page) issues at most one request.
/// Paging stops when `hasNextPage` is false, when the page carries no
/// `endCursor`, or when the response has no `files` envelope. After an
/// error the pager yields nothing further.
///
/// ```rust,ignore
/// let mut pages = FilePages::new(GraphqlClient::new(&session, &config)?);
/// while let Some(page) = pages.next_page().await? {
///     println!("{} files", page.len());
/// }
/// ```
#[derive(Debug)]
pub struct FilePages {
    client: GraphqlClient,
    state: PagerState,
    pages_fetched: usize,
}

impl FilePages {
    /// Creates a pager positioned before the first page.
    #[must_use]
    pub const fn new(client: GraphqlClient) -> Self {
        Self {
            client,
            state: PagerState::Start,
            pages_fetched: 0,
        }
    }

    /// Number of pages fetched so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Returns `true` once no further pages will be fetched.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, PagerState::Done | PagerState::Failed)
    }

    /// Fetches the next page of records, or `None` once exhausted.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::GraphQl`] if the response carries `errors`
    /// - [`CatalogError::FetchFailed`] on transport failure, timeout,
    ///   non-2xx status, or a body that does not parse as a files page
    pub async fn next_page(&mut self) -> Result<Option<Vec<FileRecord>>, CatalogError> {
        let cursor = match &self.state {
            PagerState::Start => None,
            PagerState::Fetching(cursor) => Some(cursor.clone()),
            PagerState::Done | PagerState::Failed => return Ok(None),
        };

        match self.fetch(cursor).await {
            Ok(records) => {
                self.pages_fetched += 1;
                Ok(Some(records))
            }
            Err(e) => {
                self.state = PagerState::Failed;
                Err(e)
            }
        }
    }

    async fn fetch(&mut self, cursor: Option<String>) -> Result<Vec<FileRecord>, CatalogError> {
        let variables = serde_json::json!({ "cursor": cursor });
        let response = self.client.query(FILES_QUERY, Some(variables)).await?;

        if let Some(errors) = response.body.get("errors").filter(|e| !e.is_null()) {
            return Err(CatalogError::GraphQl {
                errors: errors.clone(),
            });
        }

        let Some(connection) = Self::parse_data(&response)?.files else {
            tracing::debug!("files envelope missing from response, treating as last page");
            self.state = PagerState::Done;
            return Ok(Vec::new());
        };

        let (records, page_info) = connection.records();
        let Some(page_info) = page_info else {
            tracing::debug!("pageInfo missing from response, treating as last page");
            self.state = PagerState::Done;
            return Ok(records);
        };
        self.state = match page_info.end_cursor {
            Some(next) if page_info.has_next_page => PagerState::Fetching(next),
            None if page_info.has_next_page => {
                tracing::warn!("hasNextPage set without endCursor, stopping");
                PagerState::Done
            }
            _ => PagerState::Done,
        };

        Ok(records)
    }

    fn parse_data(response: &HttpResponse) -> Result<FilesData, CatalogError> {
        match response.body.get("data") {
            None | Some(serde_json::Value::Null) => Ok(FilesData::default()),
            Some(data) => serde_json::from_value(data.clone()).map_err(|source| {
                GraphqlError::Http(HttpError::MalformedBody {
                    code: response.code,
                    source,
                })
                .into()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use crate::config::{AccessToken, HostUrl, ShopDomain, ShopifyConfig};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn pager_for(server: &MockServer) -> FilePages {
        let config = ShopifyConfig::builder()
            .upstream_origin(HostUrl::new(server.uri()).unwrap())
            .build()
            .unwrap();
        let session = Session::new(
            ShopDomain::new("test-shop.myshopify.com").unwrap(),
            AccessToken::new("shpat_test").unwrap(),
        );
        FilePages::new(GraphqlClient::new(&session, &config).unwrap())
    }

    fn page(urls: &[&str], has_next: bool, cursor: Option<&str>) -> serde_json::Value {
        let edges: Vec<_> = urls
            .iter()
            .map(|u| serde_json::json!({"node": {"url": u}}))
            .collect();
        serde_json::json!({
            "data": {"files": {
                "edges": edges,
                "pageInfo": {"hasNextPage": has_next, "endCursor": cursor}
            }}
        })
    }

    #[tokio::test]
    async fn test_first_request_sends_null_cursor_then_follows_end_cursor() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/api/2026-01/graphql.json"))
            .and(body_partial_json(serde_json::json!({"variables": {"cursor": null}})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page(&["https://c/a.txt"], true, Some("c1"))),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({"variables": {"cursor": "c1"}})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page(&["https://c/b.txt"], false, Some("c2"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut pages = pager_for(&server).await;
        assert_eq!(pages.next_page().await.unwrap().unwrap()[0].filename, "a.txt");
        assert_eq!(pages.next_page().await.unwrap().unwrap()[0].filename, "b.txt");
        assert!(pages.next_page().await.unwrap().is_none());
        assert_eq!(pages.pages_fetched(), 2);
        assert!(pages.is_finished());
    }

    #[tokio::test]
    async fn test_missing_end_cursor_stops_paging() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&[], true, None)))
            .expect(1)
            .mount(&server)
            .await;

        let mut pages = pager_for(&server).await;
        assert_eq!(pages.next_page().await.unwrap(), Some(Vec::new()));
        assert!(pages.next_page().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_files_envelope_stops_paging() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let mut pages = pager_for(&server).await;
        assert_eq!(pages.next_page().await.unwrap(), Some(Vec::new()));
        assert!(pages.next_page().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_page_info_keeps_records_and_stops_paging() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({"variables": {"cursor": null}})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page(&["https://c/a.txt"], true, Some("c1"))),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({"variables": {"cursor": "c1"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"files": {"edges": [{"node": {"url": "https://c/b.txt"}}]}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut pages = pager_for(&server).await;
        assert_eq!(pages.next_page().await.unwrap().unwrap()[0].filename, "a.txt");
        assert_eq!(pages.next_page().await.unwrap().unwrap()[0].filename, "b.txt");
        assert!(pages.next_page().await.unwrap().is_none());
        assert!(pages.is_finished());
    }

    #[tokio::test]
    async fn test_graphql_errors_are_returned_and_stop_paging() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "errors": [{"message": "Access denied for files field."}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut pages = pager_for(&server).await;
        match pages.next_page().await {
            Err(CatalogError::GraphQl { errors }) => {
                assert_eq!(errors[0]["message"], "Access denied for files field.");
            }
            other => panic!("Expected GraphQl error, got {other:?}"),
        }
        assert!(pages.next_page().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_page_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"files": {"edges": "nope"}}
            })))
            .mount(&server)
            .await;

        let mut pages = pager_for(&server).await;
        assert!(matches!(
            pages.next_page().await,
            Err(CatalogError::FetchFailed(_))
        ));
    }
}
