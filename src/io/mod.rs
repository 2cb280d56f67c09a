//! Persisted chart file format
//!
//! Chart files store the range forest plus work items that reference
//! ranges by name (names are unique per document). Loading resolves the
//! names to stable `RangeId`s; saving maps them back. Files parse from
//! JSON or YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{GanttDescriptor, GanttRange, GanttWork, RangeId};
use crate::models::serde_helpers;

/// Problems that are fatal to loading one document.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("unable to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("unable to parse chart file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unable to parse chart file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported chart file extension '{0}' (expected json, yaml or yml)")]
    UnsupportedExtension(String),

    #[error("duplicate range name '{0}' (work references ranges by name, so names must be unique)")]
    DuplicateRangeName(String),
}

/// One range node in the persisted form. `children` may be absent or null;
/// both normalize to the empty vector.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChartFileRange {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ChartFileRange>>,
}

/// One work item in the persisted form: range references by name, progress
/// as a fraction or a percentage string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChartFileWork {
    pub name: String,
    pub start: String,
    pub end: String,

    #[serde(deserialize_with = "serde_helpers::deserialize_progress")]
    pub progress: f64,
}

/// The on-disk document shape.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ChartFile {
    #[serde(default)]
    pub ranges: Vec<ChartFileRange>,

    #[serde(default)]
    pub work: Vec<ChartFileWork>,
}

impl ChartFile {
    pub fn from_json_str(content: &str) -> Result<Self, FileError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, FileError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a chart file, dispatching on the file extension.
    pub fn load(path: &Path) -> Result<Self, FileError> {
        let content = fs::read_to_string(path).map_err(|source| FileError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            other => Err(FileError::UnsupportedExtension(other.to_string())),
        }
    }

    pub fn to_json_string(&self) -> Result<String, FileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve the persisted form into a descriptor snapshot.
    ///
    /// Work references naming no known range are kept as-is; they surface
    /// per-row at layout time rather than failing the whole document.
    pub fn into_descriptor(self) -> Result<GanttDescriptor, FileError> {
        let mut seen_names = std::collections::HashSet::new();
        let ranges = convert_ranges(self.ranges, &mut seen_names)?;

        let work = self
            .work
            .into_iter()
            .map(|w| GanttWork {
                name: w.name,
                start: RangeId::from_name(&w.start),
                end: RangeId::from_name(&w.end),
                progress: w.progress,
            })
            .collect();

        Ok(GanttDescriptor { ranges, work })
    }

    /// Build the persisted form back from a descriptor, for saving.
    pub fn from_descriptor(descriptor: &GanttDescriptor) -> Self {
        fn convert(ranges: &[GanttRange]) -> Vec<ChartFileRange> {
            ranges
                .iter()
                .map(|r| ChartFileRange {
                    name: r.name.clone(),
                    children: if r.children.is_empty() {
                        None
                    } else {
                        Some(convert(&r.children))
                    },
                })
                .collect()
        }

        ChartFile {
            ranges: convert(&descriptor.ranges),
            work: descriptor
                .work
                .iter()
                .map(|w| ChartFileWork {
                    name: w.name.clone(),
                    start: w.start.as_str().to_string(),
                    end: w.end.as_str().to_string(),
                    progress: w.progress,
                })
                .collect(),
        }
    }
}

/// Load a chart file and resolve it into a descriptor in one step.
pub fn load_descriptor(path: &Path) -> Result<GanttDescriptor, FileError> {
    log::info!("loading chart file '{}'", path.display());
    ChartFile::load(path)?.into_descriptor()
}

fn convert_ranges(
    ranges: Vec<ChartFileRange>,
    seen_names: &mut std::collections::HashSet<String>,
) -> Result<Vec<GanttRange>, FileError> {
    ranges
        .into_iter()
        .map(|r| {
            if !seen_names.insert(r.name.clone()) {
                return Err(FileError::DuplicateRangeName(r.name));
            }
            let children = convert_ranges(r.children.unwrap_or_default(), seen_names)?;
            Ok(GanttRange {
                id: RangeId::from_name(&r.name),
                name: r.name,
                children,
            })
        })
        .collect()
}
