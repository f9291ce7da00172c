//! Page traversal over executable builders
//!
//! [`FetchExt`] covers single-page access (`fetch_items`, `first`,
//! `first_or_none`) for any [`Executable`] builder. [`Paginate`] adds lazy
//! multi-page iteration and bounded eager collection for builders that also
//! accept [`PaginationFilter`].
//!
//! Pages are fetched strictly one after another. A short page ends the scan
//! without a confirmation request; an empty page ends it as well. Nothing is
//! retried or cached: the first failing fetch ends the scan and its error is
//! handed to the caller unchanged.

use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use ifpa_core::envelope::extract_items;
use ifpa_core::pagination::{check_bound, page_outcome, Cursor, PageOutcome, DEFAULT_PAGE_SIZE};
use ifpa_core::{Error, Result};

use crate::query::{Executable, PaginationFilter};

/// Single-page helpers for every executable builder
pub trait FetchExt: Executable {
    /// Execute the builder once and return the extracted items
    fn fetch_items(&self) -> BoxFuture<'_, Result<Vec<Self::Item>>> {
        Box::pin(async move {
            let page = self.execute().await?;
            Ok::<_, Error>(extract_items(page))
        })
    }

    /// First item of the first page, or [`Error::EmptyResult`]
    fn first(&self) -> BoxFuture<'_, Result<Self::Item>> {
        Box::pin(async move {
            self.first_or_none().await?.ok_or(Error::EmptyResult)
        })
    }

    /// First item of the first page, or `None` when that page is empty.
    ///
    /// Transport and API errors still propagate.
    fn first_or_none(&self) -> BoxFuture<'_, Result<Option<Self::Item>>> {
        Box::pin(async move {
            let items = self.fetch_items().await?;
            Ok::<_, Error>(items.into_iter().next())
        })
    }
}

impl<B: Executable> FetchExt for B {}

/// Multi-page traversal for paginated builders
pub trait Paginate: Executable + PaginationFilter + 'static {
    /// Lazy stream of pages, each already reduced to its items.
    ///
    /// `limit` defaults to [`DEFAULT_PAGE_SIZE`]. Every step derives a fresh
    /// builder from `self` with the cursor's offset and limit applied.
    fn pages(&self, limit: Option<usize>) -> BoxStream<'static, Result<Vec<Self::Item>>> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if limit == 0 {
            return stream::once(async {
                Err::<Vec<Self::Item>, _>(Error::Configuration(
                    "page size must be greater than zero".to_string(),
                ))
            })
            .boxed();
        }

        let base = self.clone();
        stream::try_unfold(Some(Cursor::new(limit)), move |cursor| {
            let base = base.clone();
            async move {
                let Some(cursor) = cursor else {
                    return Ok(None);
                };

                let offset = cursor.offset()?;
                let builder = base.offset(offset)?.limit(cursor.limit);
                log::debug!(
                    "fetching {} page {} (offset {offset}, limit {})",
                    builder.path(),
                    cursor.page,
                    cursor.limit
                );

                let items = extract_items(builder.execute().await?);
                let next = match page_outcome(items.len(), cursor.limit) {
                    PageOutcome::Exhausted => return Ok(None),
                    PageOutcome::Last => None,
                    PageOutcome::Full => Some(cursor.advance()),
                };

                Ok::<_, Error>(Some((items, next)))
            }
        })
        .boxed()
    }

    /// Lazy stream of items across every page
    fn iterate(&self, limit: Option<usize>) -> BoxStream<'static, Result<Self::Item>> {
        self.pages(limit)
            .map_ok(|items| stream::iter(items.into_iter().map(Ok::<_, Error>)))
            .try_flatten()
            .boxed()
    }

    /// Drain every page into one `Vec`.
    ///
    /// With `max_results` set, fails with [`Error::BoundsExceeded`] as soon as
    /// the collected count reaches the bound, checked after each page.
    fn collect_all(
        &self,
        limit: Option<usize>,
        max_results: Option<usize>,
    ) -> BoxFuture<'_, Result<Vec<Self::Item>>> {
        Box::pin(async move {
            let mut pages = self.pages(limit);
            let mut collected = Vec::new();

            while let Some(items) = pages.try_next().await? {
                collected.extend(items);
                check_bound(collected.len(), max_results)?;
            }

            log::debug!("collected {} items from {}", collected.len(), self.path());
            Ok::<_, Error>(collected)
        })
    }
}

impl<B> Paginate for B where B: Executable + PaginationFilter + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{LocationFilter, QueryBuilder};
    use crate::resources::IfpaClient;
    use crate::testing::{int_param, FnTransport};

    fn client(transport: std::sync::Arc<FnTransport>) -> IfpaClient {
        IfpaClient::with_transport(transport)
    }

    #[tokio::test]
    async fn test_short_page_stops_without_extra_fetch() {
        let transport = FnTransport::pages(vec![5, 5, 3]);
        let items: Vec<_> = client(transport.clone())
            .players()
            .query()
            .iterate(Some(5))
            .try_collect()
            .await
            .unwrap();

        assert_eq!(items.len(), 13);
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_empty_page_stops() {
        let transport = FnTransport::pages(vec![5, 5, 0]);
        let items: Vec<_> = client(transport.clone())
            .players()
            .query()
            .iterate(Some(5))
            .try_collect()
            .await
            .unwrap();

        assert_eq!(items.len(), 10);
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_items_keep_fetch_order() {
        let transport = FnTransport::collection(12);
        let ids: Vec<u64> = client(transport)
            .players()
            .query()
            .iterate(Some(5))
            .map_ok(|hit| hit.player_id)
            .try_collect()
            .await
            .unwrap();

        assert_eq!(ids, (0..12).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_cursor_params_per_page() {
        let transport = FnTransport::collection(7);
        let _: Vec<_> = client(transport.clone())
            .players()
            .query()
            .country("US")
            .iterate(Some(3))
            .try_collect()
            .await
            .unwrap();

        let requests = transport.requests();
        let cursors: Vec<(Option<i64>, Option<i64>)> = requests
            .iter()
            .map(|(_, p)| (int_param(p, "start_pos"), int_param(p, "count")))
            .collect();

        assert_eq!(
            cursors,
            vec![(Some(1), Some(3)), (Some(4), Some(3)), (Some(7), Some(3))]
        );
        assert!(requests.iter().all(|(path, p)| path == "/player/search"
            && p.contains("country")));
    }

    #[tokio::test]
    async fn test_iteration_does_not_touch_base_builder() {
        let transport = FnTransport::collection(4);
        let base = client(transport).players().query().state("OR");
        let before = base.params().clone();

        let _: Vec<_> = base.iterate(Some(2)).try_collect().await.unwrap();

        assert_eq!(base.params(), &before);
    }

    #[tokio::test]
    async fn test_default_page_size() {
        let transport = FnTransport::collection(150);
        let items: Vec<_> = client(transport.clone())
            .players()
            .query()
            .iterate(None)
            .try_collect()
            .await
            .unwrap();

        assert_eq!(items.len(), 150);
        assert_eq!(transport.request_count(), 2);
        assert_eq!(int_param(&transport.requests()[0].1, "count"), Some(100));
    }

    #[tokio::test]
    async fn test_consumer_stopping_stops_fetching() {
        let transport = FnTransport::collection(1_000);
        let first_seven: Vec<_> = client(transport.clone())
            .players()
            .query()
            .iterate(Some(5))
            .take(7)
            .try_collect()
            .await
            .unwrap();

        assert_eq!(first_seven.len(), 7);
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_zero_page_size_is_rejected() {
        let transport = FnTransport::collection(10);
        let result: Result<Vec<_>> = client(transport.clone())
            .players()
            .query()
            .iterate(Some(0))
            .try_collect()
            .await;

        assert!(matches!(result, Err(Error::Configuration(_))));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_error_mid_scan_keeps_earlier_items() {
        let transport = FnTransport::pages(vec![2, 2]);
        let mut stream = client(transport.clone()).players().query().iterate(Some(2));

        let mut seen = Vec::new();
        let err = loop {
            match stream.next().await {
                Some(Ok(hit)) => seen.push(hit.player_id),
                Some(Err(err)) => break err,
                None => panic!("stream ended without surfacing the transport error"),
            }
        };

        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert!(matches!(err, Error::Transport(_)));
        assert!(stream.next().await.is_none());
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_collect_all_unbounded() {
        let transport = FnTransport::pages(vec![5, 5, 3]);
        let items = client(transport.clone())
            .players()
            .query()
            .collect_all(Some(5), None)
            .await
            .unwrap();

        assert_eq!(items.len(), 13);
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_collect_all_under_bound() {
        let transport = FnTransport::pages(vec![5, 2]);
        let items = client(transport)
            .players()
            .query()
            .collect_all(Some(5), Some(8))
            .await
            .unwrap();

        assert_eq!(items.len(), 7);
    }

    #[tokio::test]
    async fn test_collect_all_bound_reached() {
        let transport = FnTransport::collection(usize::MAX / 2);
        let err = client(transport.clone())
            .players()
            .query()
            .collect_all(Some(5), Some(10))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::BoundsExceeded {
                max_results: 10,
                collected: 10
            }
        ));
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_collect_all_bound_equal_to_total_still_fails() {
        let transport = FnTransport::pages(vec![5, 3]);
        let err = client(transport)
            .players()
            .query()
            .collect_all(Some(5), Some(8))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::BoundsExceeded { collected: 8, .. }));
    }

    #[tokio::test]
    async fn test_collect_all_propagates_api_error() {
        let transport = FnTransport::status(503);
        let err = client(transport)
            .players()
            .query()
            .collect_all(None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ref api) if api.status == 503));
    }

    #[tokio::test]
    async fn test_first_returns_first_item_with_one_fetch() {
        let transport = FnTransport::pages(vec![3, 3]);
        let players = client(transport.clone()).players();

        let hit = players.query().first().await.unwrap();
        assert_eq!(hit.player_id, 0);
        assert_eq!(transport.request_count(), 1);

        let hit = players.query().first_or_none().await.unwrap();
        assert_eq!(hit.map(|h| h.player_id), Some(3));
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_first_on_empty_page() {
        let transport = FnTransport::pages(vec![0, 0]);
        let players = client(transport.clone()).players();

        let err = players.query().first().await.unwrap_err();
        assert!(matches!(err, Error::EmptyResult));

        let none = players.query().first_or_none().await.unwrap();
        assert!(none.is_none());
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_first_or_none_propagates_transport_errors() {
        let transport = FnTransport::status(404);
        let err = client(transport)
            .players()
            .query()
            .first_or_none()
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
