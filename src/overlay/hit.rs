//! Pointer resolution: hit-testing, click semantics, and hover targets.

use crate::domain::normalize_domain;
use crate::overlay::geometry::Point;
use crate::overlay::render::RenderPlan;
use crate::registry::{Area, AreaRegistry};

/// Result of resolving a click against the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A region was hit. The domain string is what the navigation
    /// collaborator receives; selecting it is the coordinator's job.
    Selected {
        /// Id of the clicked area.
        area_id: u32,
        /// Resolved domain of the clicked area.
        domain: String,
    },
    /// Empty background was clicked; the selection should be cleared.
    Background,
}

/// What a hover event carries.
///
/// Regions rendered from the live registry reference their area directly;
/// regions reconstructed from raw HTML attributes (the map fragment
/// fallback path) only carry strings and resolve through the registry.
/// The two cases are explicit variants, matched exhaustively, never
/// guessed from property shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTarget {
    /// The hovered element is backed by a registry area.
    Resolved {
        /// Id of the hovered area.
        area_id: u32,
    },
    /// The hovered element carries only HTML-derived attributes.
    Raw {
        /// Raw domain reference (href form).
        domain: String,
        /// Raw coords attribute, unparsed.
        coords: String,
        /// Raw title attribute, when present.
        title: Option<String>,
    },
}

/// Resolves a point to the topmost region's area id.
///
/// The highlighted layer renders above the plain layer, so it wins;
/// within a layer the last region in registry order wins, matching the
/// stacking order of later-rendered siblings. Because the layers are
/// disjoint by construction, a genuine pointer transition hits exactly
/// one region and enter/leave pairs cannot flicker across stacked
/// duplicates.
pub fn hit_test(plan: &RenderPlan, point: Point) -> Option<u32> {
    if let Some(region) = plan
        .highlighted
        .iter()
        .rev()
        .find(|region| region.rect.contains(point))
    {
        return Some(region.area_id);
    }
    plan.hit_targets
        .iter()
        .rev()
        .find(|target| target.rect.contains(point))
        .map(|target| target.area_id)
}

/// Resolves a click into an outcome.
///
/// A hit selects the area's domain; a miss maps to clearing the
/// selection. Selection and hover state reset through coordinator
/// transitions, with no reload side channel.
pub fn resolve_click(plan: &RenderPlan, registry: &AreaRegistry, point: Point) -> ClickOutcome {
    match hit_test(plan, point).and_then(|id| registry.by_id(id)) {
        Some(area) => ClickOutcome::Selected {
            area_id: area.id,
            domain: area.domain.clone(),
        },
        None => ClickOutcome::Background,
    }
}

/// Resolves a hover target to its area.
///
/// Raw targets normalize their domain reference and fall back to a
/// registry lookup; targets for domains the registry does not know yield
/// `None` and the tooltip simply does not show.
pub fn resolve_hover<'a>(target: &HoverTarget, registry: &'a AreaRegistry) -> Option<&'a Area> {
    match target {
        HoverTarget::Resolved { area_id } => registry.by_id(*area_id),
        HoverTarget::Raw { domain, .. } => {
            let normalized = normalize_domain(domain);
            if normalized.is_empty() {
                return None;
            }
            registry.by_domain(&normalized)
        }
    }
}
