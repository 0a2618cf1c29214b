//! Pattern library - named shapes centered onto a board as toggle lists.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};

use super::change_set::Coord;
use super::presets::BUILTIN_PATTERNS;

/// A shape normalized so its bounding box starts at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Vec<Coord>,
    height: u32,
    width: u32,
}

impl Pattern {
    /// Build a pattern from raw offsets. Duplicate offsets are dropped so a
    /// pattern never toggles the same cell twice.
    pub fn new(name: impl Into<String>, offsets: impl IntoIterator<Item = (u32, u32)>) -> Result<Self> {
        let name = name.into();
        let mut seen = HashSet::new();
        let raw: Vec<(u32, u32)> = offsets.into_iter().filter(|p| seen.insert(*p)).collect();

        let (Some(min_row), Some(max_row)) =
            (raw.iter().map(|p| p.0).min(), raw.iter().map(|p| p.0).max())
        else {
            return Err(EngineError::InvalidBundle(format!("pattern '{}' has no cells", name)));
        };
        // Non-empty, so the column bounds exist as well.
        let min_col = raw.iter().map(|p| p.1).min().unwrap_or(0);
        let max_col = raw.iter().map(|p| p.1).max().unwrap_or(0);

        Ok(Self {
            cells: raw
                .iter()
                .map(|&(r, c)| Coord::new(r - min_row, c - min_col))
                .collect(),
            height: max_row - min_row + 1,
            width: max_col - min_col + 1,
            name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Absolute coordinates of this shape centered on a `height` x `width`
    /// board: offset = floor((board - pattern + 1) / 2) on each axis.
    pub fn centered(&self, height: u32, width: u32) -> Result<Vec<Coord>> {
        if self.height > height || self.width > width {
            return Err(EngineError::PatternTooLarge {
                name: self.name.clone(),
                pattern_height: self.height,
                pattern_width: self.width,
                height,
                width,
            });
        }
        let dr = (height - self.height + 1) / 2;
        let dc = (width - self.width + 1) / 2;
        Ok(self
            .cells
            .iter()
            .map(|c| Coord::new(c.row + dr, c.col + dc))
            .collect())
    }
}

#[derive(Clone)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
    name_to_index: HashMap<String, usize>,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::from_generated()
    }
}

impl PatternLibrary {
    /// Library holding the built-in presets.
    pub fn from_generated() -> Self {
        let mut lib = Self::empty();
        for (name, offsets) in BUILTIN_PATTERNS {
            // Presets are non-empty constants.
            if let Ok(pattern) = Pattern::new(*name, offsets.iter().copied()) {
                lib.insert(pattern);
            }
        }
        lib
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            name_to_index: HashMap::new(),
        }
    }

    /// Library holding only the patterns of a JSON bundle.
    pub fn from_bundle_json(json: &str) -> Result<Self> {
        let mut lib = Self::empty();
        lib.merge_bundle_json(json)?;
        Ok(lib)
    }

    /// Add or replace patterns from a JSON bundle:
    /// `{"patterns":[{"name":"blinker","cells":[[0,0],[0,1],[0,2]]}]}`.
    ///
    /// The whole bundle is validated before anything is inserted.
    pub fn merge_bundle_json(&mut self, json: &str) -> Result<usize> {
        let bundle: BundleRoot = serde_json::from_str(json)?;

        let mut parsed = Vec::with_capacity(bundle.patterns.len());
        for entry in bundle.patterns {
            if entry.name.is_empty() {
                return Err(EngineError::InvalidBundle("pattern with empty name".to_string()));
            }
            parsed.push(Pattern::new(entry.name, entry.cells)?);
        }

        let count = parsed.len();
        for pattern in parsed {
            self.insert(pattern);
        }
        log::info!("pattern bundle loaded: {} patterns, {} total", count, self.len());
        Ok(count)
    }

    pub fn insert(&mut self, pattern: Pattern) {
        match self.name_to_index.get(pattern.name()) {
            Some(&idx) => self.patterns[idx] = pattern,
            None => {
                self.name_to_index.insert(pattern.name().to_string(), self.patterns.len());
                self.patterns.push(pattern);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn pattern(&self, name: &str) -> Option<&Pattern> {
        self.name_to_index.get(name).map(|&idx| &self.patterns[idx])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.name())
    }

    /// Toggle list placing `name` in the middle of a `height` x `width` board.
    pub fn get(&self, name: &str, height: u32, width: u32) -> Result<Vec<Coord>> {
        self.pattern(name)
            .ok_or_else(|| EngineError::UnknownPattern(name.to_string()))?
            .centered(height, width)
    }

    pub fn manifest_json(&self) -> String {
        let out = PatternManifest {
            format_version: 1,
            patterns: self
                .patterns
                .iter()
                .map(|p| PatternManifestEntry {
                    name: p.name(),
                    height: p.height(),
                    width: p.width(),
                    cells: p.cells().len(),
                })
                .collect(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PatternManifest<'a> {
    format_version: u32,
    patterns: Vec<PatternManifestEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PatternManifestEntry<'a> {
    name: &'a str,
    height: u32,
    width: u32,
    cells: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    #[serde(default)]
    patterns: Vec<BundlePattern>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundlePattern {
    name: String,
    cells: Vec<(u32, u32)>,
}
