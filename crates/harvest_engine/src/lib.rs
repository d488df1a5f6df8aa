//! Harvest engine: fetching, decoding, tokenizing and persisting around the pure core.
mod decode;
mod fetch;
mod filename;
mod manifest;
mod persist;
mod pipeline;
mod politeness;
mod progress;
mod render;
mod tokenize;
mod types;

pub use decode::{decode_html, DecodeError, DecodedPage};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::article_filename;
pub use manifest::{write_manifest, ManifestError, MANIFEST_FILENAME};
pub use persist::{
    ensure_output_dir, ArticleStore, AtomicFileWriter, PersistError, SavedArticle, TextFileStore,
    UtcClock,
};
pub use pipeline::{BatchSummary, FailedArticle, HarvestedArticle, Harvester};
pub use politeness::PolitenessDelay;
pub use progress::{LogProgressSink, ProgressSink};
pub use render::{render_article, render_body};
pub use tokenize::tokenize;
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, JobId, JobOutcome,
    JobProgress, Stage,
};
