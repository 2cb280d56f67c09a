//! Core data model for Gantt charts
//!
//! A chart is described by a `GanttDescriptor`: a forest of named time
//! ranges (years containing quarters containing iterations, to any depth)
//! plus a flat list of work items, each anchored to a start range and an
//! end range with a completion fraction.

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Stable identity of a range within one descriptor.
///
/// Ids are assigned at load time from the persisted range name, so layout
/// lookups are reproducible across reloads. They are opaque to the layout
/// engine; only equality and hashing matter.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RangeId(pub String);

impl RangeId {
    /// Derive the id for a persisted range name.
    pub fn from_name(name: &str) -> Self {
        RangeId(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named interval in the timeline hierarchy.
///
/// Ranges form an owned tree, so cycles are unrepresentable. A range with
/// an empty `children` vector is a leaf; "no children" in the persisted
/// form is normalized to the empty vector on load.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GanttRange {
    /// Stable identity, derived from the name at load time
    pub id: RangeId,

    /// Display name shown in the header cell
    pub name: String,

    /// Sub-ranges rendered in the header row below this one
    #[serde(default)]
    pub children: Vec<GanttRange>,
}

impl GanttRange {
    /// Create a leaf range whose id is derived from its name.
    pub fn leaf(name: &str) -> Self {
        GanttRange {
            id: RangeId::from_name(name),
            name: name.to_string(),
            children: Vec::new(),
        }
    }

    /// Create a range with children, id derived from the name.
    pub fn with_children(name: &str, children: Vec<GanttRange>) -> Self {
        GanttRange {
            id: RangeId::from_name(name),
            name: name.to_string(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A work item plotted as a horizontal bar from one range to another.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GanttWork {
    /// Display name shown in the row-label column
    pub name: String,

    /// Range the bar starts at (inclusive)
    pub start: RangeId,

    /// Range the bar ends at (inclusive)
    pub end: RangeId,

    /// Completion fraction in [0.0, 1.0]
    #[serde(deserialize_with = "serde_helpers::deserialize_progress")]
    pub progress: f64,
}

/// Immutable snapshot of ranges + work handed to the layout pipeline.
///
/// A descriptor is rebuilt whenever the underlying source data changes;
/// layout output is derived from it wholesale, never patched in place.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GanttDescriptor {
    /// Top-level ranges, in display order
    pub ranges: Vec<GanttRange>,

    /// Work items, in display order (order is significant, never sorted)
    pub work: Vec<GanttWork>,
}

impl GanttDescriptor {
    /// Total number of leaf ranges in the forest. Each leaf occupies
    /// exactly one header column regardless of depth.
    pub fn leaf_count(&self) -> usize {
        fn count(ranges: &[GanttRange]) -> usize {
            ranges
                .iter()
                .map(|r| if r.is_leaf() { 1 } else { count(&r.children) })
                .sum()
        }
        count(&self.ranges)
    }
}
