// Board files - initial page content loaded at startup
//
// A board file lists content items in page order. Format is picked from the
// file extension: `.toml` or `.json`.
//
//   [[items]]
//   kind = "image"
//   title = "Sunrise"
//   url = "https://picsum.photos/600/300"

use crate::component::{ContentSpec, PageComponent};
use crate::dom::MountTree;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parsed board file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub items: Vec<ContentSpec>,
}

impl Board {
    /// Parse board contents in the given format ("toml" or "json")
    pub fn parse(contents: &str, format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "toml" => toml::from_str(contents).context("Invalid TOML board"),
            "json" => serde_json::from_str(contents).context("Invalid JSON board"),
            other => bail!("Unsupported board format '{}' (expected toml or json)", other),
        }
    }

    /// Sample content used when no board file is configured
    pub fn demo() -> Self {
        Self {
            items: vec![
                ContentSpec::Image {
                    title: "Sunrise".to_string(),
                    url: "https://picsum.photos/600/300".to_string(),
                },
                ContentSpec::Video {
                    title: "Composite pattern in 5 minutes".to_string(),
                    url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
                },
                ContentSpec::Note {
                    title: "Reading list".to_string(),
                    body: "Design Patterns, chapter 4: Composite".to_string(),
                },
                ContentSpec::Todo {
                    title: "Next up".to_string(),
                    body: "Try the append slot policy".to_string(),
                },
            ],
        }
    }

    /// Add every item to `page`, in order
    pub fn populate(&self, page: &PageComponent, tree: &mut MountTree) -> Result<()> {
        for spec in &self.items {
            let content = spec.build(tree);
            page.append(tree, content.as_ref())
                .with_context(|| format!("Failed to add {} '{}'", spec.kind().name(), spec.title()))?;
        }
        tracing::debug!(items = self.items.len(), "board populated");
        Ok(())
    }
}

/// Pick the startup board: explicit file, else demo content if enabled, else empty
pub fn resolve(path: Option<&Path>, demo: bool) -> Result<Board> {
    match path {
        Some(path) => load(path),
        None if demo => Ok(Board::demo()),
        None => Ok(Board::default()),
    }
}

/// Load a board file, picking the format from its extension
pub fn load(path: &Path) -> Result<Board> {
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .with_context(|| format!("Board file {:?} has no extension", path))?;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file {:?}", path))?;
    Board::parse(&contents, format).with_context(|| format!("Failed to parse board file {:?}", path))
}
