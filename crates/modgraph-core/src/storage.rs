//! Load graph documents from disk into an indexed [`ModGraph`].

use crate::error::LoadError;
use crate::graph::ModGraph;
use crate::schema;
use std::fs;
use std::path::{Path, PathBuf};

/// Conventional file name of an exported mod graph.
pub const DATA_FILE: &str = "mod-data.json";

/// Default location of the graph document for a given project root.
pub fn data_file(project_root: &Path) -> PathBuf {
    project_root.join(DATA_FILE)
}

/// Read, parse, and index a graph document.
pub fn load(path: &Path) -> Result<ModGraph, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = schema::from_slice(&bytes)?;
    tracing::info!(
        path = %path.display(),
        entities = document.graph.len(),
        "loaded graph document"
    );
    Ok(ModGraph::from_document(document))
}

/// Parse and index a graph document held in memory.
pub fn load_str(json: &str) -> Result<ModGraph, LoadError> {
    Ok(ModGraph::from_document(schema::from_json(json)?))
}
