//! Integration tests for the spatial overlay: coordinate parsing, the
//! render split, hit-testing, scroll centering, and tooltip placement.

use pixel_status::overlay::{
    build_render_plan, hit_test, parse_quad, resolve_click, scroll_to_center, ClickOutcome,
    Point, Rect, TransitionConfig, Viewport,
};
use pixel_status::search::{QueryAction, QueryCoordinator};
use pixel_status::tooltip::place;

#[path = "helpers.rs"]
mod helpers;

use helpers::snapshot_from_json;

#[test]
fn quad_parse_round_trip() {
    let rect = parse_quad("100,200,300,400").unwrap();
    assert_eq!(rect, Rect::new(100.0, 200.0, 200.0, 200.0));

    // Corner order does not matter
    assert_eq!(parse_quad("300,400,100,200").unwrap(), rect);
}

#[test]
fn invalid_rectangle_is_excluded_from_rendering_but_not_registry() {
    let snapshot = snapshot_from_json(
        r#"{
            "metadata": {"totalAreas": 2},
            "areas": [
                {
                    "domain": "good.com",
                    "coordinates": {"x": 0, "y": 0, "width": 10, "height": 10}
                },
                {
                    "domain": "oob.com",
                    "coordinates": {"x": 990, "y": 990, "width": 50, "height": 50}
                }
            ]
        }"#,
    );

    // Both areas are in the registry and searchable
    assert_eq!(snapshot.registry.len(), 2);
    assert!(snapshot.registry.by_domain("oob.com").is_some());

    // Only the valid one is renderable
    let coordinator = QueryCoordinator::new();
    let plan = build_render_plan(
        &snapshot.registry,
        coordinator.state(),
        TransitionConfig::default(),
    );
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.hit_targets[0].area_id, 0);
}

#[test]
fn click_selects_then_background_clears() {
    let snapshot = helpers::three_area_snapshot();
    let mut coordinator = QueryCoordinator::new();
    let plan = build_render_plan(
        &snapshot.registry,
        coordinator.state(),
        TransitionConfig::default(),
    );

    // Click inside b.com's rectangle (100..200, 0..50)
    match resolve_click(&plan, &snapshot.registry, Point::new(150.0, 25.0)) {
        ClickOutcome::Selected { domain, .. } => {
            coordinator.dispatch(QueryAction::SelectDomain(domain), &snapshot);
        }
        ClickOutcome::Background => panic!("expected a hit"),
    }
    assert_eq!(coordinator.state().selected_domain.as_deref(), Some("b.com"));

    // Click empty background clears the selection; no reload side channel
    // exists or is needed
    match resolve_click(&plan, &snapshot.registry, Point::new(900.0, 900.0)) {
        ClickOutcome::Background => {
            coordinator.dispatch(QueryAction::ClearSelection, &snapshot);
        }
        ClickOutcome::Selected { .. } => panic!("expected background"),
    }
    assert!(coordinator.state().selected_domain.is_none());
}

#[test]
fn selection_promotes_region_to_highlighted_layer() {
    let snapshot = helpers::three_area_snapshot();
    let mut coordinator = QueryCoordinator::new();
    coordinator.dispatch(QueryAction::SetQuery("zzz-no-match".into()), &snapshot);
    coordinator.dispatch(QueryAction::SelectDomain("b.com".into()), &snapshot);

    let plan = build_render_plan(
        &snapshot.registry,
        coordinator.state(),
        TransitionConfig::default(),
    );
    assert_eq!(plan.highlighted.len(), 1);
    assert!(plan.highlighted[0].selected);
    assert_eq!(plan.highlighted[0].area_id, 1);

    // The selected region now wins hit-testing over the plain layer
    assert_eq!(hit_test(&plan, Point::new(150.0, 25.0)), Some(1));
}

#[test]
fn scroll_centers_selected_rectangle() {
    // center = coordinate + dimension/2, scroll = center - viewport/2
    let rect = Rect::new(400.0, 600.0, 100.0, 50.0);
    let viewport = Viewport::new(800.0, 600.0);
    let scroll = scroll_to_center(&rect, &viewport);
    assert_eq!(scroll, Point::new(450.0 - 400.0, 625.0 - 300.0));
}

#[test]
fn tooltip_flips_both_axes_in_bottom_right_corner() {
    let viewport = Viewport::new(1000.0, 1000.0);
    let placement = place(Point::new(950.0, 950.0), &viewport);
    // Horizontal flip: 950 - 320 - 5
    assert_eq!(placement.left, 625.0);
    // Vertical: above the pointer, 950 - 180 - 10
    assert_eq!(placement.top, 760.0);
}

#[test]
fn tooltip_uses_default_offsets_near_origin_with_clamp() {
    let viewport = Viewport::new(1000.0, 1000.0);
    let placement = place(Point::new(10.0, 10.0), &viewport);
    // Default offsets: left = 10 + 15; top would be 0, clamped to padding
    assert_eq!(placement.left, 25.0);
    assert_eq!(placement.top, 20.0);
}
