//! Tooltip placement and content.
//!
//! Placement is a pure function of the pointer and the viewport, so the
//! flip/clamp rules are directly unit-testable with literal fixtures.

use crate::config::{
    TOOLTIP_ABOVE_GAP, TOOLTIP_FLIP_GAP, TOOLTIP_HEIGHT, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y,
    TOOLTIP_PADDING, TOOLTIP_WIDTH, UNAVAILABLE,
};
use crate::overlay::{Point, Viewport};
use crate::registry::Area;

/// Computed tooltip position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge of the tooltip.
    pub left: f64,
    /// Top edge of the tooltip.
    pub top: f64,
}

/// Computes where the tooltip goes for a pointer position.
///
/// Default placement is offset right and slightly above the pointer.
/// If the default would extend past the right edge (respecting the edge
/// padding), the tooltip flips to the left of the pointer; if the pointer
/// is in the lower half of the viewport or the default would overflow the
/// bottom, the tooltip moves above the pointer. Both axes clamp to the
/// edge padding afterwards.
pub fn place(pointer: Point, viewport: &Viewport) -> Placement {
    let mut left = pointer.x + TOOLTIP_OFFSET_X;
    if left + TOOLTIP_WIDTH > viewport.width - TOOLTIP_PADDING {
        left = pointer.x - TOOLTIP_WIDTH - TOOLTIP_FLIP_GAP;
    }
    if left < TOOLTIP_PADDING {
        left = TOOLTIP_PADDING;
    }

    let below = pointer.y + TOOLTIP_OFFSET_Y;
    let lower_half = pointer.y > viewport.height / 2.0;
    let overflows_bottom = below + TOOLTIP_HEIGHT > viewport.height - TOOLTIP_PADDING;
    let mut top = if lower_half || overflows_bottom {
        pointer.y - TOOLTIP_HEIGHT - TOOLTIP_ABOVE_GAP
    } else {
        below
    };
    if top < TOOLTIP_PADDING {
        top = TOOLTIP_PADDING;
    }

    Placement { left, top }
}

/// Display-ready tooltip content for one area.
///
/// Absent analytics fields render as "unavailable" rather than
/// disappearing, so every tooltip has the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    /// Area domain, or a placeholder when unparsable.
    pub domain: String,
    /// Area title, empty when the dataset has none.
    pub title: String,
    /// DNS status display form.
    pub dns_status: String,
    /// HTTP status display form ("0" means no response).
    pub http_status: String,
    /// WHOIS status display form.
    pub whois_status: String,
    /// Registration date or "unavailable".
    pub registered_at: String,
    /// Expiry date or "unavailable".
    pub expiry_date: String,
    /// Last analysis date or "unavailable".
    pub analyzed_at: String,
    /// Nameservers in probe order.
    pub nameservers: Vec<String>,
}

impl TooltipContent {
    /// Builds tooltip content from an area.
    pub fn for_area(area: &Area) -> Self {
        let date = |value: Option<chrono::NaiveDate>| {
            value
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| UNAVAILABLE.to_string())
        };

        match &area.analytics {
            Some(analytics) => Self {
                domain: area.domain.clone(),
                title: area.title.clone(),
                dns_status: analytics.dns_status.to_string(),
                http_status: analytics.http_status.to_string(),
                whois_status: analytics.whois_status.to_string(),
                registered_at: date(analytics.registered_at),
                expiry_date: date(analytics.expiry_date),
                analyzed_at: date(analytics.analyzed_at),
                nameservers: analytics.nameservers.clone(),
            },
            None => Self {
                domain: area.domain.clone(),
                title: area.title.clone(),
                dns_status: UNAVAILABLE.to_string(),
                http_status: UNAVAILABLE.to_string(),
                whois_status: UNAVAILABLE.to_string(),
                registered_at: UNAVAILABLE.to_string(),
                expiry_date: UNAVAILABLE.to_string(),
                analyzed_at: UNAVAILABLE.to_string(),
                nameservers: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DnsStatus, DomainAnalytics, WhoisStatus};
    use chrono::NaiveDate;

    #[test]
    fn test_default_placement() {
        let viewport = Viewport::new(1000.0, 1000.0);
        let placement = place(Point::new(100.0, 100.0), &viewport);
        assert_eq!(placement, Placement { left: 115.0, top: 90.0 });
    }

    #[test]
    fn test_corner_pointer_flips_both_axes() {
        let viewport = Viewport::new(1000.0, 1000.0);
        let placement = place(Point::new(950.0, 950.0), &viewport);
        // Horizontal: 965 + 320 > 980, flip to 950 - 320 - 5
        assert_eq!(placement.left, 625.0);
        // Vertical: lower half, place above: 950 - 180 - 10
        assert_eq!(placement.top, 760.0);
    }

    #[test]
    fn test_origin_pointer_clamps_to_padding() {
        let viewport = Viewport::new(1000.0, 1000.0);
        let placement = place(Point::new(10.0, 10.0), &viewport);
        // Horizontal default 25 fits; vertical default 0 clamps to padding
        assert_eq!(placement, Placement { left: 25.0, top: 20.0 });
    }

    #[test]
    fn test_narrow_viewport_flip_then_clamp() {
        // Viewport narrower than the tooltip: flip goes negative, clamp
        // pins the tooltip at the padding
        let viewport = Viewport::new(300.0, 600.0);
        let placement = place(Point::new(150.0, 100.0), &viewport);
        assert_eq!(placement.left, TOOLTIP_PADDING);
    }

    #[test]
    fn test_bottom_overflow_places_above_even_in_upper_half() {
        // Short viewport: pointer in the upper half but the default
        // placement would still overflow the bottom
        let viewport = Viewport::new(1000.0, 260.0);
        let placement = place(Point::new(100.0, 120.0), &viewport);
        // 120 - 10 + 180 = 290 > 240, so place above and clamp
        assert_eq!(placement.top, TOOLTIP_PADDING);
    }

    #[test]
    fn test_content_with_analytics() {
        let area = Area {
            id: 7,
            domain: "pixel.com".into(),
            title: "Pixels".into(),
            coordinates: None,
            analytics: Some(DomainAnalytics {
                dns_status: DnsStatus::NoError,
                http_status: 200,
                whois_status: WhoisStatus::Registered,
                registered_at: NaiveDate::from_ymd_opt(2005, 8, 26),
                expiry_date: None,
                analyzed_at: None,
                last_updated: None,
                nameservers: vec!["ns1.pixel.com".into()],
            }),
        };
        let content = TooltipContent::for_area(&area);
        assert_eq!(content.dns_status, "NOERROR");
        assert_eq!(content.http_status, "200");
        assert_eq!(content.whois_status, "registered");
        assert_eq!(content.registered_at, "2005-08-26");
        assert_eq!(content.expiry_date, "unavailable");
        assert_eq!(content.nameservers.len(), 1);
    }

    #[test]
    fn test_content_without_analytics() {
        let area = Area {
            id: 7,
            domain: "bare.com".into(),
            title: String::new(),
            coordinates: None,
            analytics: None,
        };
        let content = TooltipContent::for_area(&area);
        assert_eq!(content.dns_status, "unavailable");
        assert_eq!(content.registered_at, "unavailable");
        assert!(content.nameservers.is_empty());
    }
}
