//! Persisted watch-list of tracked pools.
//!
//! The in-memory map is the source of truth during a run; the backing JSON
//! file is a durable mirror, read once at startup and rewritten wholesale
//! after every mutation.

use pendle_core::{pool_key, NetworkSet, TrackedPool};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access watch-list file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A present but unparseable file, distinct from an absent one: an
    /// absent file starts the store empty, a corrupt one fails loudly.
    #[error("watch-list file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// File-backed collection of tracked pools, keyed by `"<chain_id>-<address>"`.
#[derive(Debug)]
pub struct WatchlistStore {
    path: PathBuf,
    pools: BTreeMap<String, TrackedPool>,
}

impl WatchlistStore {
    /// Load the watch-list from `path`.
    ///
    /// An absent file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            info!(path = %path.display(), "No monitored pools found, starting empty");
            return Ok(Self {
                path,
                pools: BTreeMap::new(),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let pools: BTreeMap<String, TrackedPool> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?;

        info!(count = pools.len(), "Loaded monitored pools");
        Ok(Self { path, pools })
    }

    /// The tracked pools, keyed by pool key.
    pub fn pools(&self) -> &BTreeMap<String, TrackedPool> {
        &self.pools
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Upsert a tracked pool and persist the whole collection.
    ///
    /// The chain display name is resolved from the currently monitored
    /// network set, with a synthesized label for unknown chains.
    pub fn add(
        &mut self,
        chain_id: u64,
        address: &str,
        name: &str,
        min_threshold: f64,
        networks: &NetworkSet,
    ) -> Result<(), StoreError> {
        let chain_name = networks.label(chain_id);

        self.pools.insert(
            pool_key(chain_id, address),
            TrackedPool {
                name: name.to_string(),
                min_threshold,
                chain: chain_name.clone(),
            },
        );
        info!(
            pool = name,
            chain = %chain_name,
            min_threshold,
            "Pool added to monitoring"
        );
        self.persist()
    }

    /// Remove a tracked pool. Returns whether an entry was deleted; the
    /// store is only persisted when one was.
    pub fn remove(&mut self, chain_id: u64, address: &str) -> Result<bool, StoreError> {
        let key = pool_key(chain_id, address);
        match self.pools.remove(&key) {
            Some(pool) => {
                info!(
                    pool = %pool.name,
                    chain = %pool.chain,
                    "Pool removed from monitoring"
                );
                self.persist()?;
                Ok(true)
            }
            None => {
                info!(key = %key, "Pool not found in monitoring");
                Ok(false)
            }
        }
    }

    /// Serialize the whole collection to the backing file.
    ///
    /// Writes to a temp file in the same directory and renames it over the
    /// target, so a crash mid-write cannot leave a corrupt file behind.
    pub fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.pools)
            .expect("watch-list map is always serializable");

        let tmp = self.path.with_extension("json.tmp");
        write_and_rename(&tmp, &self.path, json.as_bytes()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(count = self.pools.len(), "Monitored pools saved");
        Ok(())
    }
}

fn write_and_rename(tmp: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::write(tmp, bytes)?;
    fs::rename(tmp, target)
}
