use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{HubError, Result};

pub type MemoId = u64;

pub const DEFAULT_STORE_PATH: &str = "memos.jsonl";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    pub id: MemoId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub recorded_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemoStore: Send + Sync {
    async fn add_memo(
        &self,
        title: String,
        content: String,
        category: String,
        tags: Vec<String>,
        recorded_on: NaiveDate,
    ) -> Result<MemoId>;
}

/// Memo store backed by a JSON-lines file. Ids are sequential from 1.
///
/// Every append re-reads the whole file to find the next id, so a single
/// corrupt line makes further `add_memo` calls fail with a parse error
/// until the line is repaired. Nothing is appended in that case.
pub struct JsonlMemoStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlMemoStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All memos in insertion order. A missing file is an empty store.
    pub fn list_memos(&self) -> Result<Vec<Memo>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| HubError::StorageError(format!("Failed to read memo store: {}", e)))?;

        let mut memos = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let memo: Memo = serde_json::from_str(line).map_err(|e| {
                HubError::ParseError(format!("Invalid memo on line {}: {}", line_no + 1, e))
            })?;
            memos.push(memo);
        }
        Ok(memos)
    }

    fn next_id(&self) -> Result<MemoId> {
        let last = self.list_memos()?.iter().map(|m| m.id).max().unwrap_or(0);
        Ok(last + 1)
    }

    fn append(&self, memo: &Memo) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    HubError::StorageError(format!("Failed to create memo directory: {}", e))
                })?;
            }
        }

        let line = serde_json::to_string(memo)
            .map_err(|e| HubError::StorageError(format!("JSON serialization failed: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| HubError::StorageError(format!("Failed to open memo store: {}", e)))?;

        writeln!(file, "{}", line)
            .map_err(|e| HubError::StorageError(format!("Failed to write memo: {}", e)))?;
        file.flush()
            .map_err(|e| HubError::StorageError(format!("Failed to flush memo store: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl MemoStore for JsonlMemoStore {
    async fn add_memo(
        &self,
        title: String,
        content: String,
        category: String,
        tags: Vec<String>,
        recorded_on: NaiveDate,
    ) -> Result<MemoId> {
        let _guard = self.write_lock.lock().await;

        let memo = Memo {
            id: self.next_id()?,
            title,
            content,
            category,
            tags,
            recorded_on,
            created_at: Utc::now(),
        };
        self.append(&memo)?;

        debug!("Appended memo {} to {:?}", memo.id, self.path);
        Ok(memo.id)
    }
}

/// The record written by `record-today`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayMemo {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl Default for TodayMemo {
    fn default() -> Self {
        Self {
            title: "上長からの連絡".to_string(),
            content: "上長から連絡があり、明日は休むことになった。少しナイーブな話なので詳細は書かない。"
                .to_string(),
            category: "日常".to_string(),
            tags: ["仕事", "上長", "休み", "ナイーブ"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

/// Stores `memo` once and writes a confirmation line with the new id.
pub async fn record_today<S, W>(store: &S, memo: &TodayMemo, today: NaiveDate, out: &mut W) -> Result<MemoId>
where
    S: MemoStore + ?Sized,
    W: Write,
{
    let id = store
        .add_memo(
            memo.title.clone(),
            memo.content.clone(),
            memo.category.clone(),
            memo.tags.clone(),
            today,
        )
        .await?;

    info!("Recorded memo '{}' as {}", memo.title, id);
    writeln!(out, "メモを保存しました (ID: {})", id)
        .map_err(|e| HubError::OutputError(format!("Failed to write confirmation: {}", e)))?;
    Ok(id)
}
