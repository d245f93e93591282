//! Fan-out combinators.
//!
//! Both run their futures concurrently on the calling task. `join_strict`
//! fails as soon as one future fails; `join_lenient` waits for all of them
//! and keeps only the ones that produced a value.

use futures::future::{join_all, try_join_all};
use std::future::Future;

/// Join all, fail fast. Results keep input order.
pub async fn join_strict<I, F, T, E>(futures: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    try_join_all(futures).await
}

/// Join all, drop misses. Surviving values keep input order.
pub async fn join_lenient<I, F, T>(futures: I) -> Vec<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Option<T>>,
{
    join_all(futures).await.into_iter().flatten().collect()
}
