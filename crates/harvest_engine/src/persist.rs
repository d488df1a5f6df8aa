use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use harvest_core::ExtractedArticle;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::filename::article_filename;
use crate::render::render_article;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists and is writable; create it if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes `{dir}/{filename}` through a temp file and rename, so readers never see half a file.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArticle {
    pub path: PathBuf,
    pub bytes_written: u64,
}

/// Destination for finished articles.
pub trait ArticleStore: Send + Sync {
    fn save(&self, source_url: &str, article: &ExtractedArticle) -> Result<SavedArticle, PersistError>;
}

/// Clock used to stamp `fetched_utc` into saved documents.
pub type UtcClock = Arc<dyn Fn() -> String + Send + Sync>;

/// Saves each article as a rendered `.txt` file named from its date and title.
#[derive(Clone)]
pub struct TextFileStore {
    writer: AtomicFileWriter,
    clock: UtcClock,
}

impl TextFileStore {
    pub fn new(dir: PathBuf, clock: UtcClock) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
            clock,
        }
    }
}

impl ArticleStore for TextFileStore {
    fn save(&self, source_url: &str, article: &ExtractedArticle) -> Result<SavedArticle, PersistError> {
        let filename = article_filename(&article.title, article.date.as_deref());
        let document = render_article(source_url, article, &(self.clock)());
        let path = self.writer.write(&filename, &document)?;
        Ok(SavedArticle {
            path,
            bytes_written: document.len() as u64,
        })
    }
}
