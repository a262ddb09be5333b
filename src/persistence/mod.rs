//! Saving and loading whole graphs as JSON documents.
//!
//! The document is `{ "nodes": [...], "edges": [...] }` with two-space indentation and no
//! envelope. Loading parses the entire document before touching the graph, so a bad file
//! never leaves a half-replaced graph behind.

use crate::error::PersistenceError;
use crate::model::{Edge, GraphModel, Node};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "flow.json";
pub const MIME_TYPE: &str = "application/json";

/// The persisted form of a graph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    pub fn from_graph(graph: &GraphModel) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().to_vec(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, PersistenceError> {
        serde_json::to_string_pretty(self).map_err(|e| PersistenceError::Serialize(e.to_string()))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, PersistenceError> {
        serde_json::from_slice(bytes).map_err(|e| PersistenceError::Parse(e.to_string()))
    }
}

/// A serialized graph ready to be handed to the host's save mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// The host's file-save mechanism, e.g. a download link or a native save dialog.
pub trait FileSink {
    fn save_file(&mut self, file: &ExportedFile) -> Result<(), PersistenceError>;
}

/// Writes exported files into a directory under their suggested name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, file: &ExportedFile) -> PathBuf {
        self.dir.join(&file.file_name)
    }
}

impl FileSink for DirectorySink {
    fn save_file(&mut self, file: &ExportedFile) -> Result<(), PersistenceError> {
        let path = self.path_for(file);
        fs::write(&path, &file.contents).map_err(|e| PersistenceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Serializes and restores a [`GraphModel`].
#[derive(Debug, Clone)]
pub struct PersistenceAdapter {
    file_name: String,
}

impl Default for PersistenceAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl PersistenceAdapter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Serializes the graph as pretty-printed JSON.
    pub fn save(&self, graph: &GraphModel) -> Result<ExportedFile, PersistenceError> {
        let contents = GraphDocument::from_graph(graph).to_json_pretty()?;
        log::info!(
            "Saving flowgraph ({} nodes, {} edges) as '{}'",
            graph.nodes().len(),
            graph.edges().len(),
            self.file_name
        );
        Ok(ExportedFile {
            file_name: self.file_name.clone(),
            mime_type: MIME_TYPE,
            contents,
        })
    }

    /// Serializes the graph and hands it to `sink`.
    pub fn export(&self, graph: &GraphModel, sink: &mut dyn FileSink) -> Result<(), PersistenceError> {
        let file = self.save(graph)?;
        sink.save_file(&file)
    }

    /// Parses `bytes` and replaces the graph's nodes and edges with the result.
    /// On a parse failure the graph is left exactly as it was.
    pub fn load(&self, graph: &mut GraphModel, bytes: &[u8]) -> Result<(), PersistenceError> {
        let document = GraphDocument::from_slice(bytes).inspect_err(|e| {
            log::error!("Error parsing flowgraph JSON: {}", e);
        })?;
        log::info!(
            "Loaded flowgraph with {} nodes and {} edges",
            document.nodes.len(),
            document.edges.len()
        );
        graph.replace(document.nodes, document.edges);
        Ok(())
    }

    /// Reads a document from disk and loads it.
    pub fn load_file(&self, graph: &mut GraphModel, path: &Path) -> Result<(), PersistenceError> {
        let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.load(graph, &bytes)
    }
}
