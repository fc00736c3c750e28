//! Loading the upstream repository payload.
//!
//! The fetch stage hands over a JSON array. Elements are either bare
//! repository objects or workflow item envelopes of the form
//! `{ "json": { ... } }`; both shapes may appear in the same array.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::models::{non_empty, RawRepository};

/// Parse a payload into repositories, preserving input order.
pub fn parse_items(payload: &str) -> Result<Vec<RawRepository>> {
    let value: serde_json::Value =
        serde_json::from_str(payload).with_context(|| "Failed to parse repository payload as JSON")?;

    let Some(elements) = value.as_array() else {
        bail!("repository payload must be a JSON array");
    };

    let mut repos = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        if !element.is_object() {
            bail!("item {} is not a JSON object", index);
        }
        let body = match element.get("json") {
            Some(inner) if inner.is_object() => inner,
            _ => element,
        };
        let repo = RawRepository::deserialize(body)
            .with_context(|| format!("Failed to read repository at index {}", index))?;
        repos.push(repo);
    }

    Ok(repos)
}

/// Read repositories from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_items(path: Option<&Path>) -> Result<Vec<RawRepository>> {
    let payload = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| "Failed to read repository payload from stdin")?;
            buf
        }
    };

    let repos = parse_items(&payload)?;
    tracing::debug!(count = repos.len(), "loaded repositories");
    Ok(repos)
}

/// Login of the first repository's owner, if it has a non-empty one.
pub fn owner_login(repos: &[RawRepository]) -> Option<&str> {
    repos
        .first()?
        .owner
        .as_ref()
        .and_then(|owner| non_empty(&owner.login))
}
