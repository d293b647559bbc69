//! The spatial overlay: canvas geometry, the map fragment parser, the
//! two-layer render plan, and pointer resolution.

mod geometry;
mod hit;
mod map_source;
mod render;

pub use geometry::{
    parse_quad, parse_valid_quad, scroll_to_center, Point, Rect, Viewport,
};
pub use hit::{hit_test, resolve_click, resolve_hover, ClickOutcome, HoverTarget};
pub use map_source::parse_map_fragment;
pub use render::{
    build_render_plan, Easing, HighlightedRegion, HitTarget, RenderPlan, TransitionConfig,
};
