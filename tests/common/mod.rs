#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};

pub fn run_splitticket_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_splitticket"))
        .current_dir(cwd)
        .args(args)
        .output()
        .with_context(|| format!("run splitticket {:?}", args))
}

pub fn run_splitticket(cwd: &Path, args: &[&str]) -> Result<String> {
    let out = run_splitticket_raw(cwd, args)?;
    if !out.status.success() {
        anyhow::bail!(
            "splitticket {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

/// Initialized split form directory with a small board.
pub fn init_with_board(dir: &Path) -> Result<()> {
    run_splitticket(dir, &["init"])?;
    let board = serde_json::json!({
        "version": 1,
        "milestones": [
            { "name": "m1" },
            { "name": "m0", "completed": true },
            { "name": "m2" }
        ],
        "components": ["core", "ui"],
        "tickets": [
            { "id": 1, "summary": "parent", "milestone": "m1", "component": "core" },
            { "id": 3, "summary": "three", "milestone": "m1", "component": "ui" },
            { "id": 5, "summary": "five", "milestone": "m2", "component": "core" },
            { "id": 7, "summary": "seven", "milestone": "m1", "component": "core" },
            { "id": 8, "summary": "closed", "milestone": "m1", "component": "core", "status": "closed" }
        ],
        "splits": [
            { "ticket": 1, "split_to": 7, "split_at": 0 }
        ]
    });
    std::fs::write(
        dir.join(".splitticket").join("board.json"),
        serde_json::to_vec_pretty(&board).context("serialize board")?,
    )
    .context("write board.json")?;
    Ok(())
}
