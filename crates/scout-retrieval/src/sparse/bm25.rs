//! BM25 over catalog descriptions, stored in an SQLite FTS5 table.
//!
//! FTS5 ranks matches with BM25 (k1 = 1.2, b = 0.75) and the `porter`
//! tokenizer stems English terms, so "translate" matches "translation".
//! English stopwords are removed from both indexed text and queries.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use rusqlite::{params, Connection, OpenFlags};
use scout_core::constants::SPARSE_INDEX_FILE;
use scout_core::errors::{RetrievalError, ScoutResult};
use scout_core::text::content_terms;

const CREATE_TABLE: &str = "CREATE VIRTUAL TABLE model_fts USING fts5(
    name UNINDEXED,
    body,
    tokenize = 'porter unicode61'
)";

/// FTS5 `bm25()` is lower-is-better; it is negated so larger scores rank first.
/// Rowids follow index order, which breaks ties.
const SEARCH: &str = "SELECT name, -bm25(model_fts) AS score
    FROM model_fts
    WHERE model_fts MATCH ?1
    ORDER BY score DESC, rowid
    LIMIT ?2";

/// Persisted BM25 index with one document per catalog record.
pub struct Bm25Index {
    path: PathBuf,
    conn: Mutex<Connection>,
    docs: usize,
}

impl Bm25Index {
    /// Index `(id, text)` documents in the order given and persist them into `dir`.
    ///
    /// The table is written to a staging file and renamed into place once
    /// complete, so a failed build never leaves a loadable partial index.
    pub fn build<'a, I>(dir: &Path, docs: I) -> ScoutResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let path = dir.join(SPARSE_INDEX_FILE);
        let staging = path.with_extension("partial");
        std::fs::create_dir_all(dir).map_err(|e| write_failed(&path, e))?;
        if staging.exists() {
            std::fs::remove_file(&staging).map_err(|e| write_failed(&staging, e))?;
        }

        let mut conn = Connection::open(&staging).map_err(|e| write_failed(&staging, e))?;
        conn.execute_batch(CREATE_TABLE)
            .map_err(|e| write_failed(&staging, e))?;

        let tx = conn.transaction().map_err(|e| write_failed(&staging, e))?;
        {
            let mut insert = tx
                .prepare("INSERT INTO model_fts (rowid, name, body) VALUES (?1, ?2, ?3)")
                .map_err(|e| write_failed(&staging, e))?;
            for (rowid, (id, text)) in (1i64..).zip(docs) {
                insert
                    .execute(params![rowid, id, content_terms(text).join(" ")])
                    .map_err(|e| write_failed(&staging, e))?;
            }
        }
        tx.commit().map_err(|e| write_failed(&staging, e))?;
        conn.close().map_err(|(_, e)| write_failed(&staging, e))?;

        std::fs::rename(&staging, &path).map_err(|e| write_failed(&path, e))?;
        Self::load(dir)
    }

    /// Open an index persisted by [`build`](Self::build), read-only.
    pub fn load(dir: &Path) -> ScoutResult<Self> {
        let path = dir.join(SPARSE_INDEX_FILE);
        let conn = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| load_failed(&path, e))?;
        let docs: i64 = conn
            .query_row("SELECT count(*) FROM model_fts", [], |row| row.get(0))
            .map_err(|e| load_failed(&path, e))?;
        Ok(Self {
            path,
            conn: Mutex::new(conn),
            docs: docs as usize,
        })
    }

    pub fn len(&self) -> usize {
        self.docs
    }

    pub fn is_empty(&self) -> bool {
        self.docs == 0
    }

    /// Up to `limit` `(id, score)` hits with positive score, best first.
    /// Equal scores keep index order.
    pub fn search(&self, query: &str, limit: usize) -> ScoutResult<Vec<(String, f64)>> {
        let Some(expr) = match_expression(query) else {
            return Ok(Vec::new());
        };
        if limit == 0 || self.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let mut stmt = conn
            .prepare_cached(SEARCH)
            .map_err(|e| query_failed(&self.path, e))?;
        let rows = stmt
            .query_map(params![expr, limit as i64], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
            })
            .map_err(|e| query_failed(&self.path, e))?;

        let mut hits = Vec::new();
        for row in rows {
            let (name, score) = row.map_err(|e| query_failed(&self.path, e))?;
            if score > 0.0 {
                hits.push((name, score));
            }
        }
        Ok(hits)
    }
}

/// FTS5 expression matching any content term of `query`, or `None` when
/// nothing but stopwords and punctuation remains.
fn match_expression(query: &str) -> Option<String> {
    let terms = content_terms(query);
    if terms.is_empty() {
        return None;
    }
    Some(
        terms
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(" OR "),
    )
}

fn write_failed(path: &Path, e: impl Display) -> RetrievalError {
    RetrievalError::IndexWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn load_failed(path: &Path, e: impl Display) -> RetrievalError {
    RetrievalError::IndexLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn query_failed(path: &Path, e: impl Display) -> RetrievalError {
    RetrievalError::IndexQueryFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn build(dir: &TempDir, docs: &[(&str, &str)]) -> Bm25Index {
        Bm25Index::build(dir.path(), docs.iter().copied()).unwrap()
    }

    fn names(hits: Vec<(String, f64)>) -> Vec<String> {
        hits.into_iter().map(|(name, _)| name).collect()
    }

    fn index(dir: &TempDir) -> Bm25Index {
        build(
            dir,
            &[
                ("t5-small", "text to text model for summarization and translation"),
                ("bart-cnn", "abstractive news summarization model"),
                ("vit", "vision transformer for image classification"),
            ],
        )
    }

    #[test]
    fn ranks_matching_documents() {
        let dir = TempDir::new().unwrap();
        let hits = index(&dir).search("news summarization", 10).unwrap();
        assert_eq!(hits[0].0, "bart-cnn");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|(_, s)| *s > 0.0));
    }

    #[test]
    fn stemmed_terms_match_inflected_forms() {
        let dir = TempDir::new().unwrap();
        let idx = build(
            &dir,
            &[
                ("t5", "model for translation and summarization of news"),
                ("vit", "image classifier"),
                ("wav2vec", "speech recognition"),
            ],
        );
        assert_eq!(names(idx.search("translate and summarize", 5).unwrap()), vec!["t5"]);
        assert_eq!(names(idx.search("classify images", 5).unwrap()), vec!["vit"]);
    }

    #[test]
    fn stopwords_never_match() {
        let dir = TempDir::new().unwrap();
        let idx = build(
            &dir,
            &[
                ("t5", "model for translation and summarization of news"),
                ("vit", "image classifier"),
            ],
        );
        assert!(idx.search("the a of and", 5).unwrap().is_empty());
        assert!(idx.search("for and of", 5).unwrap().is_empty());
    }

    #[test]
    fn no_overlap_no_hits() {
        let dir = TempDir::new().unwrap();
        assert!(index(&dir).search("speech recognition", 10).unwrap().is_empty());
    }

    #[test]
    fn blank_query_no_hits() {
        let dir = TempDir::new().unwrap();
        assert!(index(&dir).search("?!", 10).unwrap().is_empty());
    }

    #[test]
    fn query_syntax_is_not_interpreted() {
        let dir = TempDir::new().unwrap();
        let hits = index(&dir).search("NEAR(\"image\" OR) classification*", 10).unwrap();
        assert_eq!(names(hits), vec!["vit"]);
    }

    #[test]
    fn limit_truncates() {
        let dir = TempDir::new().unwrap();
        assert_eq!(index(&dir).search("model summarization", 1).unwrap().len(), 1);
    }

    #[test]
    fn identical_documents_tie_in_index_order() {
        let dir = TempDir::new().unwrap();
        let idx = build(&dir, &[("b", "same text"), ("a", "same text")]);
        assert_eq!(names(idx.search("text", 5).unwrap()), vec!["b", "a"]);
    }

    #[test]
    fn shorter_document_wins_on_equal_tf() {
        let dir = TempDir::new().unwrap();
        let idx = build(
            &dir,
            &[
                ("long", "summarization plus many other unrelated words here"),
                ("short", "summarization"),
                ("other", "image classification"),
            ],
        );
        assert_eq!(idx.search("summarization", 2).unwrap()[0].0, "short");
    }

    #[test]
    fn empty_index() {
        let dir = TempDir::new().unwrap();
        let idx = Bm25Index::build(dir.path(), std::iter::empty()).unwrap();
        assert!(idx.is_empty());
        assert!(idx.search("anything", 3).unwrap().is_empty());
    }

    #[test]
    fn reloaded_index_scores_identically() {
        let dir = TempDir::new().unwrap();
        let idx = index(&dir);
        assert!(dir.path().join(SPARSE_INDEX_FILE).is_file());
        assert!(!dir.path().join(SPARSE_INDEX_FILE).with_extension("partial").exists());

        let loaded = Bm25Index::load(dir.path()).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(
            loaded.search("summarization", 3).unwrap(),
            idx.search("summarization", 3).unwrap()
        );
    }

    #[test]
    fn load_from_dir_without_index_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = Bm25Index::load(dir.path()).err().unwrap();
        assert!(matches!(
            err,
            scout_core::ScoutError::Retrieval(RetrievalError::IndexLoadFailed { .. })
        ));
    }

    #[test]
    fn load_rejects_foreign_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SPARSE_INDEX_FILE), b"{\"not\": \"sqlite\"}").unwrap();
        assert!(Bm25Index::load(dir.path()).is_err());
    }
}
