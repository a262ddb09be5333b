use thiserror::Error;

/// Errors that can occur while saving or loading a flow document.
#[derive(Error, Debug, Clone)]
pub enum PersistenceError {
    #[error("Failed to parse flowgraph JSON: {0}")]
    Parse(String),

    #[error("Failed to serialize flowgraph: {0}")]
    Serialize(String),

    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors raised by pointer gestures that could not be applied.
///
/// None of these are fatal: the editor logs them and drops the gesture.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GestureError {
    #[error("Node '{0}' does not exist in the graph")]
    NodeNotFound(String),

    #[error("Node '{node_id}' has no port named '{port}'")]
    PortNotFound { node_id: String, port: String },

    #[error("Node '{0}' has not been measured by the layout pass yet")]
    NodeNotMeasured(String),

    #[error("No drag in progress for node '{0}'")]
    NoActiveDrag(String),
}

/// Errors that can occur when loading an editor configuration file.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config JSON: {0}")]
    Parse(String),
}
