//! # Fan-out / Fan-in
//!
//! Scatter-gather over a JoinSet: every future is spawned at once, results
//! are slotted back by their original index, and the first failure fails the
//! whole batch. Outstanding tasks are aborted when the JoinSet drops.

use crate::error::{PokedexError, Result};
use std::future::Future;
use tokio::task::JoinSet;

pub(crate) async fn join_ordered<T, Fut>(tasks: Vec<Fut>) -> Result<Vec<T>>
where
    T: Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    let total = tasks.len();
    let mut join_set = JoinSet::new();

    // SCATTER
    for (index, task) in tasks.into_iter().enumerate() {
        join_set.spawn(async move { (index, task.await) });
    }

    // GATHER
    let mut slots: Vec<Option<T>> = (0..total).map(|_| None).collect();
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, Ok(value))) => slots[index] = Some(value),
            Ok((index, Err(e))) => {
                tracing::debug!(index, total, error = %e, "fan-out batch failed");
                return Err(e);
            }
            Err(e) => return Err(PokedexError::Task(e.to_string())),
        }
    }

    slots
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(|| PokedexError::Task("fan-out task produced no result".to_string()))
}
