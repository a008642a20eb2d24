//! Multi-page retrieval

use std::future::Future;

use dns_update_provider::{PaginatedResponse, ProviderError};
use futures::{StreamExt, TryStreamExt, stream};

use crate::error::CoreResult;

/// Number of pages needed for `total` items at `page_size` per page.
pub(crate) const fn total_pages(total: u32, page_size: u32) -> u32 {
    let page_size = if page_size == 0 { 1 } else { page_size };
    total.div_ceil(page_size)
}

/// Collect every page into a single `Vec<T>`, preserving page order and
/// in-page order.
///
/// `fetch` receives a 1-indexed page number. The page count is derived from
/// the declared total, so a zone reporting `T` items issues exactly
/// `max(1, ceil(T / page_size))` requests. The first failure aborts the whole
/// collection and nothing collected so far is returned.
///
/// With `concurrency <= 1` pages are fetched one after another and the page
/// count is re-read from every response. Otherwise page 1 is fetched alone and
/// the remaining pages are requested with at most `concurrency` in flight.
pub async fn collect_all_pages<T, F, Fut>(
    page_size: u32,
    concurrency: usize,
    fetch: F,
) -> CoreResult<Vec<T>>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<T>, ProviderError>>,
{
    if concurrency <= 1 {
        return collect_sequential(page_size, fetch).await;
    }

    let first = fetch(1).await?;
    let pages = total_pages(first.total_count, page_size);
    let mut all = first.items;
    if pages <= 1 {
        return Ok(all);
    }

    log::debug!("Fetching pages 2..={pages} with {concurrency} in flight");
    let rest: Vec<PaginatedResponse<T>> = stream::iter(2..=pages)
        .map(&fetch)
        .buffered(concurrency)
        .try_collect()
        .await?;

    for page in rest {
        all.extend(page.items);
    }
    Ok(all)
}

async fn collect_sequential<T, F, Fut>(page_size: u32, fetch: F) -> CoreResult<Vec<T>>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<T>, ProviderError>>,
{
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let response = fetch(page).await?;
        all.extend(response.items);

        let pages = total_pages(response.total_count, page_size);
        log::debug!("Fetched page {page}/{pages}");
        if page >= pages {
            break;
        }
        page += 1;
    }

    Ok(all)
}
