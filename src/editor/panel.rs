//! Commands issued by the editor panel (toolbar): add a node, save, load.

use super::Editor;
use crate::error::PersistenceError;
use crate::geometry::Point;
use crate::model::Node;
use crate::persistence::{ExportedFile, FileSink};
use rand::Rng;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

impl Editor {
    /// Adds a fresh node of `kind` at a random spot in the spawn window and returns its id.
    pub fn add_node(&mut self, kind: &str) -> String {
        let id = self.fresh_node_id();
        let mut node = Node::new(id.clone(), kind, format!("New {} node", kind));
        node.metadata.position = self.spawn_position();
        self.graph.add_node(node);
        id
    }

    /// `node-<unix millis>`, suffixed with `-N` if that id is already taken.
    fn fresh_node_id(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let base = format!("node-{}", millis);
        if !self.graph.contains_node(&base) {
            return base;
        }
        (1..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| !self.graph.contains_node(candidate))
            .unwrap_or(base)
    }

    fn spawn_position(&self) -> Point {
        let spawn = self.config.spawn;
        if spawn.spread == 0 {
            return spawn.base;
        }
        let mut rng = rand::rng();
        Point::new(
            spawn.base.x + rng.random_range(0..spawn.spread) as f64,
            spawn.base.y + rng.random_range(0..spawn.spread) as f64,
        )
    }

    /// Serializes the current graph for the host to store.
    pub fn save(&self) -> Result<ExportedFile, PersistenceError> {
        self.persistence
            .save(&self.graph)
            .inspect_err(|e| log::error!("Saving flowgraph failed: {}", e))
    }

    /// Serializes the current graph and hands it to `sink`.
    pub fn export(&self, sink: &mut dyn FileSink) -> Result<(), PersistenceError> {
        self.persistence
            .export(&self.graph, sink)
            .inspect_err(|e| log::error!("Exporting flowgraph failed: {}", e))
    }

    /// Replaces the graph with a parsed document. Pending connections and drags refer to
    /// the old graph and are dropped on success.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), PersistenceError> {
        self.persistence.load(&mut self.graph, bytes)?;
        self.reset_gestures();
        Ok(())
    }

    pub fn load_file(&mut self, path: &Path) -> Result<(), PersistenceError> {
        self.persistence
            .load_file(&mut self.graph, path)
            .inspect_err(|e| log::error!("Loading '{}' failed: {}", path.display(), e))?;
        self.reset_gestures();
        Ok(())
    }

    fn reset_gestures(&mut self) {
        self.connections.cancel();
        self.drags.clear();
    }
}
