//! Loading graphs from JSON and TOML documents
//!
//! A document is the adjacency mapping itself:
//! `{"A": ["B", "C"]}` for [`Graph`] and `{"A": [["B", 1.0]]}` for
//! [`WeightedGraph`]. TOML keys must be strings.

use crate::error::Result;
use crate::graph::types::{Graph, WeightedGraph};
use serde::de::DeserializeOwned;
use std::fs;
use std::hash::Hash;
use std::path::Path;

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Read a document from `path`, as TOML for `.toml` files and JSON otherwise
fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    let document = if is_toml(path) {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    tracing::debug!(path = %path.display(), "graph_document_loaded");
    Ok(document)
}

impl<N: DeserializeOwned + Eq + Hash + Clone> Graph<N> {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_document(path)
    }
}

impl<N: DeserializeOwned + Eq + Hash + Clone> WeightedGraph<N> {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_document(path)
    }
}
