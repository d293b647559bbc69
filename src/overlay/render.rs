//! The two-layer render plan.
//!
//! Highlighted regions (current matches plus the selection) become rich,
//! individually keyed descriptors carrying transition parameters; every
//! other valid region becomes a minimal invisible hit-target. The split
//! is a performance contract: the highlighted layer holds a small
//! minority, the plain layer holds thousands of regions that must stay
//! cheap, and the two are never flattened into one fully-interactive
//! layer.

use serde::{Deserialize, Serialize};

use crate::config::TRANSITION_DURATION_MS;
use crate::overlay::geometry::Rect;
use crate::registry::AreaRegistry;
use crate::search::QueryState;

/// Easing curve for enter/exit transitions.
///
/// Pure configuration for the rendering collaborator; the core never
/// animates anything itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Accelerating.
    EaseIn,
    /// Decelerating.
    #[default]
    EaseOut,
    /// Accelerating then decelerating.
    EaseInOut,
}

/// Enter/exit transition parameters for highlighted regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Easing curve.
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: TRANSITION_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

/// A fully styled, animated region in the highlighted layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightedRegion {
    /// Render key, unique per region even for duplicate
    /// `(domain, rectangle)` entries.
    pub key: String,
    /// Owning area id.
    pub area_id: u32,
    /// Region rectangle in canvas pixels.
    pub rect: Rect,
    /// Whether this region's domain is the current selection.
    pub selected: bool,
    /// Enter/exit transition parameters.
    pub transition: TransitionConfig,
}

/// A minimal invisible hit-target in the plain layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitTarget {
    /// Render key, unique per region.
    pub key: String,
    /// Owning area id.
    pub area_id: u32,
    /// Region rectangle in canvas pixels.
    pub rect: Rect,
}

/// Everything the rendering collaborator needs for one pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    /// Rich regions: current matches and the selection.
    pub highlighted: Vec<HighlightedRegion>,
    /// Minimal hit-targets for everything else.
    pub hit_targets: Vec<HitTarget>,
}

impl RenderPlan {
    /// Total number of renderable regions across both layers.
    pub fn len(&self) -> usize {
        self.highlighted.len() + self.hit_targets.len()
    }

    /// Whether the plan renders nothing.
    pub fn is_empty(&self) -> bool {
        self.highlighted.is_empty() && self.hit_targets.is_empty()
    }
}

// Keys include the id so duplicate (domain, rect) entries stay distinct.
fn render_key(domain: &str, id: u32) -> String {
    format!("{domain}#{id}")
}

/// Builds the render plan for the current query state.
///
/// Only areas with valid geometry appear. An area lands in the
/// highlighted layer when its domain is in the highlight set or equals
/// the selected domain; everything else becomes a hit-target. Both layers
/// preserve registry insertion order.
pub fn build_render_plan(
    registry: &AreaRegistry,
    state: &QueryState,
    transition: TransitionConfig,
) -> RenderPlan {
    let mut plan = RenderPlan::default();

    for area in registry.renderable() {
        let Some(rect) = area.coordinates else {
            continue;
        };
        let selected = state.selected_domain.as_deref() == Some(area.domain.as_str());
        let highlighted = selected || state.highlighted_domains.contains(&area.domain);

        if highlighted {
            plan.highlighted.push(HighlightedRegion {
                key: render_key(&area.domain, area.id),
                area_id: area.id,
                rect,
                selected,
                transition,
            });
        } else {
            plan.hit_targets.push(HitTarget {
                key: render_key(&area.domain, area.id),
                area_id: area.id,
                rect,
            });
        }
    }

    plan
}
