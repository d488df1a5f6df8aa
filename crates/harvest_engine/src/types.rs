use std::fmt;
use std::path::PathBuf;

/// Position of a page in a batch; the listing page is job 0.
pub type JobId = u64;

/// Steps an article moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Queued,
    Downloading,
    Decoding,
    Extracting,
    Writing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobProgress {
    pub job_id: JobId,
    pub stage: Stage,
    /// Bytes received so far; only set while downloading.
    pub bytes: Option<u64>,
}

/// Everything a [`ProgressSink`](crate::ProgressSink) hears during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The listing page was read and this many article links survived.
    LinksGathered {
        listing_url: String,
        count: usize,
    },
    Progress(JobProgress),
    /// One article finished, saved or not.
    JobCompleted {
        job_id: JobId,
        url: String,
        result: Result<JobOutcome, FailureKind>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    /// URL after redirects; relative links on the page resolve against it.
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

/// What a successfully harvested article produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub final_url: String,
    pub title: String,
    pub date: Option<String>,
    pub block_count: usize,
    pub saved_to: PathBuf,
    pub bytes_written: u64,
}

/// Why a page could not be turned into markup, with the underlying message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Reason an article was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode { encoding: String },
    /// The article was extracted but its file could not be written.
    Persist(String),
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Decode { encoding } => write!(f, "could not decode page as {encoding}"),
            FailureKind::Persist(reason) => write!(f, "could not save article: {reason}"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
