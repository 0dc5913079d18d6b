//! Best-score leaderboard, one ranking per library.
//!
//! Rankings live in a string key-value store as JSON arrays under
//! `leaderboard:<library id>`. The local player's identity is created on first
//! use and kept under `leaderboard:user`. Swapping [`MemoryStore`] or
//! [`JsonFileStore`] for a remote store only needs a new [`KeyValueStore`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizResult;

const STORAGE_PREFIX: &str = "leaderboard:";
const USER_KEY: &str = "leaderboard:user";

// ---------------------------------------------------------------------------
// Key-value storage
// ---------------------------------------------------------------------------

pub trait KeyValueStore {
    fn get(&self, key: &str) -> QuizResult<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> QuizResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> QuizResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> QuizResult<()> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }
}

/// All keys in one pretty-printed JSON object file, rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open `path`, starting empty if the file does not exist yet or does not
    /// hold a JSON object of strings. Read failures are still errors.
    pub fn open(path: impl AsRef<Path>) -> QuizResult<Self> {
        let path = path.as_ref().to_path_buf();
        let items = if path.exists() {
            let text = fs::read_to_string(&path)?;
            serde_json::from_str(&text).unwrap_or_else(|err| {
                warn!("Ignoring unreadable store {}: {}", path.display(), err);
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };
        Ok(JsonFileStore { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> QuizResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    /// Writes a sibling temp file and renames it over the store, so a crash
    /// leaves either the old file or the new one. Memory is only updated once
    /// the file is in place.
    fn set(&mut self, key: &str, value: String) -> QuizResult<()> {
        let mut next = self.items.clone();
        next.insert(key.to_string(), value);
        let json = serde_json::to_string_pretty(&next)?;

        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        self.items = next;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Leaderboard records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardUser {
    pub user_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub name: String,
    pub score: u32,
    pub finished_count: u32,
    pub accuracy_pct: f64,
    /// Unix time in milliseconds.
    #[serde(default)]
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub library_id: String,
    pub score: u32,
    pub finished_count: u32,
    pub accuracy_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub rank: usize,
    pub total: usize,
    pub user: LeaderboardEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankInfo {
    /// 1-based; `None` if the player has no score in this library.
    pub rank: Option<usize>,
    pub total: usize,
    pub user: Option<LeaderboardEntry>,
}

// ---------------------------------------------------------------------------
// Leaderboard service
// ---------------------------------------------------------------------------

fn library_key(library_id: &str) -> String {
    let id = if library_id.is_empty() { "default" } else { library_id };
    format!("{STORAGE_PREFIX}{id}")
}

pub struct Leaderboard<S: KeyValueStore> {
    store: S,
    rng: StdRng,
}

impl<S: KeyValueStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Leaderboard { store, rng: StdRng::from_entropy() }
    }

    /// Seeded variant so generated identities are reproducible.
    pub fn with_seed(store: S, seed: u64) -> Self {
        Leaderboard { store, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// The local player, created and persisted on first call.
    pub fn get_or_create_user(&mut self) -> QuizResult<LeaderboardUser> {
        if let Some(raw) = self.store.get(USER_KEY)? {
            match serde_json::from_str(&raw) {
                Ok(user) => return Ok(user),
                Err(e) => warn!("Discarding unreadable leaderboard user: {e}"),
            }
        }

        let suffix: String = (0..6)
            .map(|_| char::from_digit(self.rng.gen_range(0..36), 36).unwrap_or('0'))
            .collect();
        let user = LeaderboardUser {
            user_id: format!("u_{}_{}", to_base36(now_millis().max(0) as u64), suffix),
            name: format!("Learner {}", self.rng.gen_range(1000..=9999)),
        };
        self.store.set(USER_KEY, serde_json::to_string(&user)?)?;
        Ok(user)
    }

    pub fn submit_score(&mut self, submission: ScoreSubmission) -> QuizResult<SubmitOutcome> {
        self.submit_score_at(submission, now_millis())
    }

    /// Record a score stamped `now` (unix millis). Only the player's best
    /// score is kept; an equal score replaces the older one.
    pub fn submit_score_at(
        &mut self,
        submission: ScoreSubmission,
        now: i64,
    ) -> QuizResult<SubmitOutcome> {
        let LeaderboardUser { user_id, name } = self.get_or_create_user()?;
        let key = library_key(&submission.library_id);
        let mut list = self.load_list(&key)?;

        let entry = LeaderboardEntry {
            user_id: user_id.clone(),
            name,
            score: submission.score,
            finished_count: submission.finished_count,
            accuracy_pct: submission.accuracy_pct,
            updated_at: now,
        };

        match list.iter_mut().find(|e| e.user_id == user_id) {
            Some(prev) => {
                let better = entry.score > prev.score;
                let newer_tie = entry.score == prev.score && now > prev.updated_at;
                if better || newer_tie {
                    *prev = entry.clone();
                }
            }
            None => list.push(entry.clone()),
        }

        list.sort_by(|a, b| b.score.cmp(&a.score).then(b.updated_at.cmp(&a.updated_at)));
        self.store.set(&key, serde_json::to_string(&list)?)?;

        let rank = list.iter().position(|e| e.user_id == user_id).map_or(0, |i| i + 1);
        Ok(SubmitOutcome { rank, total: list.len(), user: entry })
    }

    /// Best `n` entries, highest score first.
    pub fn top_n(&self, library_id: &str, n: usize) -> QuizResult<Vec<LeaderboardEntry>> {
        let mut list = self.load_list(&library_key(library_id))?;
        list.truncate(n);
        Ok(list)
    }

    pub fn user_rank(&mut self, library_id: &str) -> QuizResult<RankInfo> {
        let user = self.get_or_create_user()?;
        let list = self.load_list(&library_key(library_id))?;
        let idx = list.iter().position(|e| e.user_id == user.user_id);
        Ok(RankInfo {
            rank: idx.map(|i| i + 1),
            total: list.len(),
            user: idx.map(|i| list[i].clone()),
        })
    }

    /// Unparseable lists read as empty.
    fn load_list(&self, key: &str) -> QuizResult<Vec<LeaderboardEntry>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                warn!("Ignoring unreadable leaderboard {key}: {e}");
                Ok(Vec::new())
            }
        }
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(char::from_digit((n % 36) as u32, 36).unwrap_or('0'));
        n /= 36;
    }
    digits.iter().rev().collect()
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Percentile line shown after a session, e.g. `你的世界排名进入前5%`.
pub fn intl_rank_text(rank: Option<usize>, total: usize) -> String {
    match rank {
        Some(rank) if rank > 0 && total > 0 => {
            let pct = ((rank as f64 / total as f64) * 100.0).ceil().max(1.0) as u32;
            format!("你的世界排名进入前{pct}%")
        }
        _ => "暂无排名".to_string(),
    }
}

/// Stable avatar colour for a user id, as `rgb(r, g, b)` with each channel in 60..220.
pub fn hash_to_color(s: &str) -> String {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    let r = (hash >> 16) & 0xff;
    let g = (hash >> 8) & 0xff;
    let b = hash & 0xff;
    format!("rgb({}, {}, {})", r % 160 + 60, g % 160 + 60, b % 160 + 60)
}

/// Avatar fallback: first letter of the first and last word, or `U`.
pub fn initials_from_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let first_char = |s: &str| s.chars().next().map(|c| c.to_uppercase().collect::<String>());
    match parts.as_slice() {
        [] => "U".to_string(),
        [only] => first_char(only).unwrap_or_default(),
        [first, .., last] => {
            let head = first_char(first).unwrap_or_default();
            let tail = first_char(last).unwrap_or_default();
            format!("{head}{tail}")
        }
    }
}
