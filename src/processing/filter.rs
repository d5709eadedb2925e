use std::sync::Arc;

use futures::future;
use tokio::sync::Semaphore;

use crate::domain::document::Document;
use crate::repository::ProfileReader;
use crate::scoring::{RelevanceScorer, ScoreError, ScoreOutcome};

/// Batches larger than this are eligible for concurrent scoring.
pub const PARALLEL_THRESHOLD: usize = 10;

/// Upper bound on concurrent scoring workers, regardless of batch size.
pub const MAX_WORKERS: usize = 8;

/// A complete partition of the input batch: every document comes back in
/// exactly one of the two groups.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    pub accepted: Vec<Document>,
    pub rejected: Vec<Document>,
}

#[derive(Default)]
struct FilterStats {
    processed: usize,
    accepted: usize,
    rejected: usize,
    failed: usize,
}

/// Partition `documents` into accepted and rejected sets for `entity_name`.
///
/// Each scored document gets its confidence written into `relevance_score`
/// exactly once. A scoring failure is logged with the document id and routes
/// the document to the rejected group without a score; it never aborts the
/// batch. Batches above [`PARALLEL_THRESHOLD`] are scored concurrently when
/// `parallel` is set; group order is unspecified on that path.
pub async fn filter_documents<P>(
    documents: Vec<Document>,
    entity_name: &str,
    scorer: Arc<RelevanceScorer<P>>,
    parallel: bool,
) -> FilterOutcome
where
    P: ProfileReader + 'static,
{
    log::info!(
        "Filtering {} documents for entity {entity_name}",
        documents.len()
    );

    let results = if parallel && documents.len() > PARALLEL_THRESHOLD {
        score_concurrently(&documents, entity_name, scorer).await
    } else {
        documents
            .iter()
            .map(|doc| scorer.score(&doc.content, entity_name, None))
            .collect()
    };

    let mut outcome = FilterOutcome::default();
    let mut stats = FilterStats::default();
    for (mut doc, result) in documents.into_iter().zip(results) {
        stats.processed += 1;
        match result {
            Ok(score) => {
                doc.relevance_score = Some(score.confidence);
                if score.accepted {
                    stats.accepted += 1;
                    outcome.accepted.push(doc);
                } else {
                    stats.rejected += 1;
                    outcome.rejected.push(doc);
                }
            }
            Err(e) => {
                log::error!("Failed to score document {}: {e}", doc.id);
                stats.failed += 1;
                outcome.rejected.push(doc);
            }
        }
    }

    log::info!(
        "Finished filtering for {entity_name}: processed={}, accepted={}, rejected={}, failed={}",
        stats.processed,
        stats.accepted,
        stats.rejected,
        stats.failed
    );

    outcome
}

/// Score every document on blocking worker tasks, at most [`MAX_WORKERS`] in
/// flight. Results come back in input order, so partitioning never depends on
/// task completion order.
async fn score_concurrently<P>(
    documents: &[Document],
    entity_name: &str,
    scorer: Arc<RelevanceScorer<P>>,
) -> Vec<Result<ScoreOutcome, ScoreError>>
where
    P: ProfileReader + 'static,
{
    let workers = MAX_WORKERS.min(documents.len());
    let semaphore = Arc::new(Semaphore::new(workers));

    let tasks = documents.iter().map(|doc| {
        let scorer = Arc::clone(&scorer);
        let semaphore = Arc::clone(&semaphore);
        let content = doc.content.clone();
        let entity = entity_name.to_string();
        let doc_id = doc.id.clone();
        async move {
            // The semaphore is never closed, so acquisition cannot fail here.
            let _permit = semaphore.acquire().await.ok();
            let handle =
                tokio::task::spawn_blocking(move || scorer.score(&content, &entity, None));
            match handle.await {
                Ok(result) => result,
                Err(e) => Err(ScoreError::Task(format!(
                    "worker for document {doc_id} aborted: {e}"
                ))),
            }
        }
    });

    future::join_all(tasks).await
}
