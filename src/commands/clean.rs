//! Clean the output directory

use anyhow::{Context, Result};
use std::fs;

use crate::Garden;

/// Remove the output directory
pub fn run(garden: &Garden) -> Result<()> {
    if garden.output_dir.exists() {
        fs::remove_dir_all(&garden.output_dir)
            .with_context(|| format!("Failed to delete {:?}", garden.output_dir))?;
        tracing::info!("Deleted: {:?}", garden.output_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", garden.output_dir);
    }

    Ok(())
}
