//! Corpus loading.
//!
//! A corpus is a text file with one `phrase<SEP>score` pair per line. The
//! line is split at the last separator, so phrases may contain the
//! separator themselves. Blank lines are skipped, as are lines starting with
//! `#` unless comment skipping is disabled.
//!
//! The file is memory mapped and its lines are parsed in parallel; entries
//! are then inserted sequentially in file order so that results do not
//! depend on thread scheduling.

use crate::error::{Error, Result};
use crate::index::trie::AutocompleteIndex;
use crate::index::types::{IndexConfig, Score};
use crate::utils::progress::{ProgressBar, ProgressStyle};
use log::{debug, info};
use memmap2::Mmap;
use rayon::prelude::*;
use std::fs::File;
use std::path::Path;

/// Number of inserts between progress bar updates
const PROGRESS_STEP: usize = 4096;

/// Reads corpus files according to an [`IndexConfig`]
pub struct CorpusLoader<'a> {
    config: &'a IndexConfig,
    progress: bool,
}

impl<'a> CorpusLoader<'a> {
    pub fn new(config: &'a IndexConfig) -> Self {
        Self {
            config,
            progress: false,
        }
    }

    /// Show a progress bar on stderr while inserting
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Read and parse a corpus file.
    pub fn read(&self, path: &Path) -> Result<Vec<(String, Score)>> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            debug!("{} is empty", path.display());
            return Ok(Vec::new());
        }

        // Safety: the mapping is read-only and dropped before we return
        let mmap = unsafe { Mmap::map(&file)? };
        let entries = self.parse(&mmap)?;
        info!("read {} entries from {}", entries.len(), path.display());
        Ok(entries)
    }

    /// Parse corpus bytes into `(phrase, score)` pairs in file order.
    ///
    /// The first malformed line, by line number, is reported as
    /// [`Error::Parse`].
    pub fn parse(&self, content: &[u8]) -> Result<Vec<(String, Score)>> {
        let lines = split_lines(content);
        let separator = self.config.separator;
        let skip_comments = self.config.skip_comments;

        let parsed: Vec<Result<Option<(String, Score)>>> = lines
            .par_iter()
            .enumerate()
            .map(|(i, raw)| -> Result<Option<(String, Score)>> {
                let line = i + 1;
                let text = std::str::from_utf8(raw).map_err(|e| Error::Parse {
                    line,
                    reason: format!("invalid UTF-8: {}", e),
                })?;
                parse_line(text, separator, skip_comments)
                    .map_err(|reason| Error::Parse { line, reason })
            })
            .collect();

        let mut entries = Vec::with_capacity(parsed.len());
        for result in parsed {
            if let Some(entry) = result? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// Load a corpus file into `index`. Returns the number of phrases added.
    pub fn load_into(&self, path: &Path, index: &mut AutocompleteIndex) -> Result<usize> {
        let entries = self.read(path)?;
        let total = entries.len();

        let bar = if self.progress {
            let bar = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                bar.set_style(style.progress_chars("█▓▒░  "));
            }
            bar.set_message("Inserting phrases...");
            Some(bar)
        } else {
            None
        };

        for (i, (phrase, score)) in entries.iter().enumerate() {
            index.insert(phrase, *score);
            if (i + 1) % PROGRESS_STEP == 0 {
                if let Some(bar) = &bar {
                    bar.inc(PROGRESS_STEP as u64);
                }
            }
        }

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
        debug!("inserted {} phrases, index now holds {}", total, index.len());
        Ok(total)
    }

    /// Build a fresh index from a corpus file.
    pub fn build(&self, path: &Path) -> Result<AutocompleteIndex> {
        let mut index = AutocompleteIndex::from_config(self.config)?;
        self.load_into(path, &mut index)?;
        Ok(index)
    }
}

/// Split on `\n`, keeping empty lines so that line numbers stay aligned.
fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    for end in memchr::memchr_iter(b'\n', content) {
        lines.push(&content[start..end]);
        start = end + 1;
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Parse one corpus line. `Ok(None)` means the line carries no entry.
pub fn parse_line(
    line: &str,
    separator: char,
    skip_comments: bool,
) -> std::result::Result<Option<(String, Score)>, String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() || (skip_comments && line.starts_with('#')) {
        return Ok(None);
    }

    let (phrase, score) = line
        .rsplit_once(separator)
        .ok_or_else(|| format!("missing {:?} separator before score", separator))?;
    let score = score
        .trim()
        .parse::<Score>()
        .map_err(|e| format!("invalid score {:?}: {}", score.trim(), e))?;

    Ok(Some((phrase.to_string(), score)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("tape grid\t98", '\t', true),
            Ok(Some(("tape grid".to_string(), 98)))
        );
        assert_eq!(
            parse_line("minus\t-4\r", '\t', true),
            Ok(Some(("minus".to_string(), -4)))
        );
        assert_eq!(parse_line("   ", '\t', true), Ok(None));
        assert_eq!(parse_line("# header", '\t', true), Ok(None));
    }

    #[test]
    fn test_parse_line_splits_at_last_separator() {
        assert_eq!(
            parse_line("a,b,c,7", ',', true),
            Ok(Some(("a,b,c".to_string(), 7)))
        );
    }

    #[test]
    fn test_parse_line_comments_kept_when_disabled() {
        assert_eq!(
            parse_line("#hashtag\t3", '\t', false),
            Ok(Some(("#hashtag".to_string(), 3)))
        );
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_line("no score here", '\t', true).is_err());
        assert!(parse_line("phrase\tlots", '\t', true).is_err());
    }

    #[test]
    fn test_parse_reports_line_number() {
        let config = IndexConfig::default();
        let loader = CorpusLoader::new(&config);
        let err = loader
            .parse(b"good\t1\n\n# note\nbad line\nalso good\t2\n")
            .unwrap_err();
        match err {
            Error::Parse { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let config = IndexConfig::default();
        let loader = CorpusLoader::new(&config);
        let content: String = (0..1000).map(|i| format!("p{i}\t{i}\n")).collect();

        let entries = loader.parse(content.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1000);
        assert_eq!(entries[0], ("p0".to_string(), 0));
        assert_eq!(entries[999], ("p999".to_string(), 999));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let config = IndexConfig::default();
        let loader = CorpusLoader::new(&config);
        assert!(matches!(
            loader.parse(b"ok\t1\n\xff\xfe\t2\n"),
            Err(Error::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_build_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.tsv");
        fs::write(&path, "tape\t100\ntape api\t95\ntap water\t10\n").unwrap();

        let config = IndexConfig {
            k_limit: 2,
            ..IndexConfig::default()
        };
        let index = CorpusLoader::new(&config).build(&path).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.query("tap"), vec!["tape", "tape api"]);
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.tsv");
        fs::write(&path, "").unwrap();

        let config = IndexConfig::default();
        let index = CorpusLoader::new(&config).build(&path).unwrap();
        assert!(index.is_empty());
        assert!(index.query("").is_empty());
    }
}
