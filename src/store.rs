use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{Board, FormConfig, FormState, TicketId};

const STORE_DIR: &str = ".splitticket";

#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn store_dir(root: &Path) -> PathBuf {
        root.join(STORE_DIR)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn open(project_root: &Path) -> Result<Self> {
        let root = Self::store_dir(project_root);
        if !root.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `splitticket init`)",
                STORE_DIR,
                root.display()
            ));
        }
        Ok(Self { root })
    }

    pub fn init(project_root: &Path, force: bool) -> Result<Self> {
        let root = Self::store_dir(project_root);
        if root.exists() && !force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to re-init)",
                STORE_DIR,
                root.display()
            ));
        }

        fs::create_dir_all(root.join("drafts")).context("create drafts dir")?;

        let store = Self { root };
        store
            .write_config(&FormConfig::default())
            .context("write config.json")?;
        store
            .write_board(&Board::empty())
            .context("write board.json")?;
        Ok(store)
    }

    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if Self::store_dir(dir).is_dir() {
                return Self::open(dir);
            }
        }
        Err(anyhow!(
            "No {} directory found (run `splitticket init`)",
            STORE_DIR
        ))
    }

    pub fn read_config(&self) -> Result<FormConfig> {
        let bytes = fs::read(self.root.join("config.json")).context("read config.json")?;
        serde_json::from_slice(&bytes).context("parse config.json")
    }

    pub fn write_config(&self, cfg: &FormConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")
    }

    pub fn read_board(&self) -> Result<Board> {
        let bytes = fs::read(self.root.join("board.json")).context("read board.json")?;
        serde_json::from_slice(&bytes).context("parse board.json")
    }

    pub fn write_board(&self, board: &Board) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(board).context("serialize board")?;
        write_atomic(&self.root.join("board.json"), &bytes).context("write board.json")
    }

    pub fn draft_path(&self, ticket: TicketId) -> PathBuf {
        self.root.join("drafts").join(format!("{}.json", ticket))
    }

    pub fn write_draft(&self, ticket: TicketId, state: &FormState) -> Result<PathBuf> {
        let path = self.draft_path(ticket);
        let bytes = serde_json::to_vec_pretty(state).context("serialize form state")?;
        write_atomic(&path, &bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}

pub fn read_form_state(path: &Path) -> Result<FormState> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
