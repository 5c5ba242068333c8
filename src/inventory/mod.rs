use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{HubError, Result};

pub const DEFAULT_AGENTS_DIR: &str = "agents";

fn is_hidden(name: &str) -> bool {
    name.starts_with('.') || name.starts_with("__")
}

/// Names of the agent package directories directly under `root`, sorted.
pub fn scan_agents(root: &Path) -> Result<Vec<String>> {
    debug!("Scanning agent directory {:?}", root);

    let entries = fs::read_dir(root).map_err(|e| {
        HubError::InventoryError(format!("Failed to read agents directory {:?}: {}", root, e))
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(HubError::from)?;
        // follows symlinks, so a linked package directory is listed too
        if !entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) {
            debug!("Skipping hidden directory {}", name);
            continue;
        }
        names.push(name);
    }

    names.sort();
    info!("Found {} agent packages in {:?}", names.len(), root);
    Ok(names)
}

/// Writes the numbered inventory, starting at 1.
pub fn render_inventory<W: Write>(names: &[String], out: &mut W) -> Result<()> {
    let write_err = |e: std::io::Error| HubError::OutputError(format!("Failed to write inventory: {}", e));

    writeln!(out, "Agents ({}):", names.len()).map_err(write_err)?;
    for (index, name) in names.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, name).map_err(write_err)?;
    }
    Ok(())
}
