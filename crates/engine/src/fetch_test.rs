#[cfg(test)]
mod tests {
    use crate::fetch::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use github::client::ClientError;
    use github::graphql::{Connection, PageInfo, PrNode, PrPage};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    fn make_node(number: i32) -> PrNode {
        PrNode {
            number,
            title: format!("PR {}", number),
            url: format!("https://github.com/acme/widgets/pull/{}", number),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            reviews: Connection::default(),
            comments: Connection::default(),
            reactions: Connection::default(),
        }
    }

    /// Serves `total_pages` chained pages, one PR per page, recording every
    /// cursor it was asked for.
    struct ScriptedSource {
        total_pages: u32,
        calls: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedSource {
        fn new(total_pages: u32) -> Self {
            Self {
                total_pages,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Option<String>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for ScriptedSource {
        async fn fetch_page(
            &self,
            cursor: Option<String>,
            _page_size: u32,
        ) -> Result<PrPage, ClientError> {
            let index: u32 = match &cursor {
                None => 0,
                Some(c) => c.trim_start_matches("cursor-").parse::<u32>().unwrap() + 1,
            };
            self.calls.lock().unwrap().push(cursor);

            let has_next = index + 1 < self.total_pages;
            Ok(PrPage {
                page_info: PageInfo {
                    has_next_page: has_next,
                    end_cursor: has_next.then(|| format!("cursor-{}", index)),
                },
                nodes: vec![make_node(index as i32 + 1)],
            })
        }
    }

    struct FailingSource {
        fail_on: u32,
        calls: AtomicU32,
    }

    impl FailingSource {
        fn new(fail_on: u32) -> Self {
            Self {
                fail_on,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl PageSource for FailingSource {
        async fn fetch_page(
            &self,
            _cursor: Option<String>,
            _page_size: u32,
        ) -> Result<PrPage, ClientError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call >= self.fail_on {
                return Err(ClientError::Api {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(PrPage {
                page_info: PageInfo {
                    has_next_page: true,
                    end_cursor: Some(format!("cursor-{}", call)),
                },
                nodes: vec![make_node(call as i32)],
            })
        }
    }

    /// Claims more data but never hands out a cursor to follow.
    struct CursorlessSource;

    #[async_trait]
    impl PageSource for CursorlessSource {
        async fn fetch_page(
            &self,
            _cursor: Option<String>,
            _page_size: u32,
        ) -> Result<PrPage, ClientError> {
            Ok(PrPage {
                page_info: PageInfo {
                    has_next_page: true,
                    end_cursor: None,
                },
                nodes: vec![make_node(1)],
            })
        }
    }

    struct EmptySource;

    #[async_trait]
    impl PageSource for EmptySource {
        async fn fetch_page(
            &self,
            _cursor: Option<String>,
            _page_size: u32,
        ) -> Result<PrPage, ClientError> {
            Ok(PrPage {
                page_info: PageInfo {
                    has_next_page: false,
                    end_cursor: None,
                },
                nodes: vec![],
            })
        }
    }

    #[tokio::test]
    async fn test_page_ceiling_respected() {
        let source = ScriptedSource::new(20);
        let nodes = fetch_all(&source, 30, 6).await.unwrap();

        assert_eq!(source.calls().len(), 6);
        assert_eq!(nodes.len(), 6);
    }

    #[tokio::test]
    async fn test_stops_when_source_exhausts_early() {
        let source = ScriptedSource::new(3);
        let nodes = fetch_all(&source, 30, 6).await.unwrap();

        assert_eq!(source.calls().len(), 3);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].number, 1);
        assert_eq!(nodes[2].number, 3);
    }

    #[tokio::test]
    async fn test_cursor_threading() {
        let source = ScriptedSource::new(3);
        fetch_all(&source, 30, 6).await.unwrap();

        assert_eq!(
            source.calls(),
            vec![
                None,
                Some("cursor-0".to_string()),
                Some("cursor-1".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_state_transitions_on_happy_path() {
        let source = ScriptedSource::new(2);
        let mut paginator = Paginator::new(30, 6);
        assert_eq!(*paginator.state(), PageState::Fetching);

        paginator.advance(&source).await.unwrap();
        assert_eq!(
            *paginator.state(),
            PageState::HasMore("cursor-0".to_string())
        );

        paginator.advance(&source).await.unwrap();
        assert_eq!(*paginator.state(), PageState::Exhausted);

        // Further advances are no-ops
        let page = paginator.advance(&source).await.unwrap();
        assert!(page.is_none());
        assert_eq!(paginator.pages_fetched(), 2);
    }

    #[tokio::test]
    async fn test_fetch_error_fails_the_run() {
        let source = FailingSource::new(2);
        let mut paginator = Paginator::new(30, 6);

        let first = paginator.advance(&source).await.unwrap();
        assert_eq!(first.unwrap().len(), 1);

        let err = paginator.advance(&source).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 500, .. }));
        assert_eq!(*paginator.state(), PageState::Failed);

        // Failed is terminal; no further requests go out
        let after = paginator.advance(&source).await.unwrap();
        assert!(after.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_propagates_errors() {
        let source = FailingSource::new(1);
        let result = fetch_all(&source, 30, 6).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_next_page_without_cursor_ends_pagination() {
        let source = CursorlessSource;
        let nodes = fetch_all(&source, 30, 6).await.unwrap();
        assert_eq!(nodes.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_repo_is_success_not_error() {
        let source = EmptySource;
        let nodes = fetch_all(&source, 30, 6).await.unwrap();
        assert!(nodes.is_empty());
    }

    #[tokio::test]
    async fn test_ceiling_leaves_paginator_exhausted() {
        let source = ScriptedSource::new(20);
        let mut paginator = Paginator::new(30, 2);

        while paginator.advance(&source).await.unwrap().is_some() {}

        assert_eq!(*paginator.state(), PageState::Exhausted);
        assert_eq!(paginator.pages_fetched(), 2);
        assert_eq!(source.calls().len(), 2);
    }
}
