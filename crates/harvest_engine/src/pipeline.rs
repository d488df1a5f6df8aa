use std::collections::BTreeSet;
use std::sync::Arc;

use harvest_core::{extract_links, ArticleExtractor, ParseEvent, SiteProfile, DEFAULT_MAX_LINKS};
use harvest_log::{harvest_debug, harvest_info, harvest_warn};
use url::Url;

use crate::decode::decode_html;
use crate::fetch::Fetcher;
use crate::persist::ArticleStore;
use crate::politeness::PolitenessDelay;
use crate::progress::ProgressSink;
use crate::tokenize::tokenize;
use crate::{EngineEvent, FailureKind, FetchError, JobId, JobOutcome, JobProgress, Stage};

const LISTING_JOB_ID: JobId = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestedArticle {
    pub url: String,
    pub outcome: JobOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedArticle {
    pub url: String,
    pub reason: FailureKind,
}

/// Result of one listing-to-files run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub listing_url: String,
    pub links_found: usize,
    pub saved: Vec<HarvestedArticle>,
    /// Links not fetched because they were already harvested.
    pub skipped: Vec<String>,
    pub failed: Vec<FailedArticle>,
}

struct LoadedPage {
    final_url: String,
    events: Vec<ParseEvent>,
}

/// Drives listing and article pages through fetch, extraction and storage.
///
/// Articles are processed one at a time with a politeness delay before each
/// fetch. A failing article is recorded and the batch moves on.
pub struct Harvester {
    fetcher: Arc<dyn Fetcher>,
    store: Arc<dyn ArticleStore>,
    profile: SiteProfile,
    politeness: PolitenessDelay,
    max_links: usize,
}

impl Harvester {
    pub fn new(fetcher: Arc<dyn Fetcher>, store: Arc<dyn ArticleStore>) -> Self {
        Self {
            fetcher,
            store,
            profile: SiteProfile::default(),
            politeness: PolitenessDelay::default(),
            max_links: DEFAULT_MAX_LINKS,
        }
    }

    pub fn with_profile(mut self, profile: SiteProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_politeness(mut self, politeness: PolitenessDelay) -> Self {
        self.politeness = politeness;
        self
    }

    pub fn with_max_links(mut self, max_links: usize) -> Self {
        self.max_links = max_links;
        self
    }

    /// Article URLs from the listing page, absolute and in page order.
    ///
    /// A listing that cannot be fetched or decoded yields no links.
    pub async fn gather_links(&self, listing_url: &str, sink: &dyn ProgressSink) -> Vec<String> {
        let page = match self.load_page(LISTING_JOB_ID, listing_url, sink).await {
            Ok(page) => page,
            Err(err) => {
                harvest_warn!("Listing {} unavailable: {}", listing_url, err);
                return Vec::new();
            }
        };

        let base = Url::parse(&page.final_url).ok();
        let links: Vec<String> = extract_links(&page.events, &self.profile, self.max_links)
            .into_iter()
            .filter_map(|link| {
                let resolved = resolve_url(&link.href, base.as_ref());
                if resolved.is_none() {
                    harvest_debug!("Dropping unresolvable link {:?}", link.href);
                }
                resolved
            })
            .collect();

        sink.emit(EngineEvent::LinksGathered {
            listing_url: listing_url.to_string(),
            count: links.len(),
        });
        links
    }

    /// Fetches, extracts and stores a single article.
    pub async fn harvest_article(
        &self,
        job_id: JobId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<JobOutcome, FailureKind> {
        let page = self
            .load_page(job_id, url, sink)
            .await
            .map_err(|err| err.kind)?;

        emit_stage(sink, job_id, Stage::Extracting);
        let article = ArticleExtractor::extract(&self.profile, &page.events).normalize();
        if article.title.is_empty() {
            harvest_debug!("job {} has no title heading", job_id);
        }

        emit_stage(sink, job_id, Stage::Writing);
        let saved = self
            .store
            .save(url, &article)
            .map_err(|err| FailureKind::Persist(err.to_string()))?;

        emit_stage(sink, job_id, Stage::Done);
        Ok(JobOutcome {
            final_url: page.final_url,
            title: article.title,
            date: article.date,
            block_count: article.content.len(),
            saved_to: saved.path,
            bytes_written: saved.bytes_written,
        })
    }

    /// Gathers links from `listing_url` and harvests each one not in `already_done`.
    pub async fn run(
        &self,
        listing_url: &str,
        already_done: &BTreeSet<String>,
        sink: &dyn ProgressSink,
    ) -> BatchSummary {
        let links = self.gather_links(listing_url, sink).await;
        let mut summary = BatchSummary {
            listing_url: listing_url.to_string(),
            links_found: links.len(),
            ..BatchSummary::default()
        };
        let mut seen_this_run = BTreeSet::new();

        for (index, url) in links.into_iter().enumerate() {
            let job_id = index as JobId + 1;
            if already_done.contains(&url) || !seen_this_run.insert(url.clone()) {
                harvest_debug!("job {} already harvested: {}", job_id, url);
                summary.skipped.push(url);
                continue;
            }

            self.politeness.wait().await;
            emit_stage(sink, job_id, Stage::Queued);
            let result = self.harvest_article(job_id, &url, sink).await;
            sink.emit(EngineEvent::JobCompleted {
                job_id,
                url: url.clone(),
                result: result.clone(),
            });
            match result {
                Ok(outcome) => summary.saved.push(HarvestedArticle { url, outcome }),
                Err(reason) => summary.failed.push(FailedArticle { url, reason }),
            }
        }

        harvest_info!(
            "Batch done: {} saved, {} skipped, {} failed",
            summary.saved.len(),
            summary.skipped.len(),
            summary.failed.len()
        );
        summary
    }

    async fn load_page(
        &self,
        job_id: JobId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<LoadedPage, FetchError> {
        let output = self.fetcher.fetch(job_id, url, sink).await?;

        emit_stage(sink, job_id, Stage::Decoding);
        let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref())
            .map_err(|err| {
                let kind = FailureKind::Decode {
                    encoding: err.encoding().to_string(),
                };
                FetchError::new(kind, err.to_string())
            })?;

        Ok(LoadedPage {
            final_url: output.metadata.final_url,
            events: tokenize(&decoded.markup),
        })
    }
}

fn emit_stage(sink: &dyn ProgressSink, job_id: JobId, stage: Stage) {
    sink.emit(EngineEvent::Progress(JobProgress {
        job_id,
        stage,
        bytes: None,
    }));
}

fn resolve_url(reference: &str, base: Option<&Url>) -> Option<String> {
    let trimmed = reference.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    if trimmed.to_ascii_lowercase().starts_with("javascript:") {
        return None;
    }
    if let Ok(url) = Url::parse(trimmed) {
        return Some(url.into());
    }
    base.and_then(|base| base.join(trimmed).ok()).map(Into::into)
}
