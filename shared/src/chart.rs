//! # Category breakdown chart model
//!
//! Builds everything the statistics page draws from the per-category totals:
//! percentage shares, donut segment geometry, legend/tooltip/data-label text,
//! and the entries of the list shown next to the chart.
//!
//! The frontend only rasterizes what this module computes, so a new
//! `DonutChart` is built for every statistics reload and the previous one is
//! dropped.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::format::{format_currency, format_percent};
use crate::{CategoryId, CategoryTotal};

/// Inner radius as a fraction of the outer radius
pub const CUTOUT_RATIO: f64 = 0.65;

/// Segments at or below this share get no in-chart label
pub const DATA_LABEL_MIN_PERCENT: u32 = 5;

/// Brightness shift applied to a segment color for its gradient edge
pub const GRADIENT_SHIFT: i32 = -30;

/// Message shown when the period has no expenses
pub const EMPTY_MESSAGE: &str = "Nenhuma despesa encontrada";

/// One category's slice of the absolute-value total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    /// Signed total as reported by the backend
    pub total: f64,
    /// `|total|`
    pub magnitude: f64,
    /// `round(100 * |total| / Σ|totals|)`
    pub percent: u32,
    /// Unrounded share, used by the list view
    pub exact_percent: f64,
}

impl CategoryShare {
    /// Legend text, e.g. `Alimentação (60%)`
    pub fn legend_label(&self) -> String {
        format!("{} ({}%)", self.name, self.percent)
    }

    /// Tooltip text, e.g. `Alimentação: R$ 60,00 (60%)`
    pub fn tooltip_label(&self) -> String {
        format!("{}: {} ({}%)", self.name, format_currency(self.magnitude), self.percent)
    }

    /// Text drawn inside the segment; small and empty segments get none
    pub fn data_label(&self) -> Option<String> {
        if self.magnitude > 0.0 && self.percent > DATA_LABEL_MIN_PERCENT {
            Some(format!("{}%", self.percent))
        } else {
            None
        }
    }
}

/// Compute the share of each category in the absolute-value total.
///
/// A zero grand total yields 0% for every category. Each share is rounded on
/// its own, so the sum can miss 100 by up to half a point per category.
pub fn shares(data: &[CategoryTotal]) -> Vec<CategoryShare> {
    let grand_total: f64 = data.iter().map(|item| item.total.abs()).sum();

    data.iter()
        .map(|item| {
            let magnitude = item.total.abs();
            let exact_percent = if grand_total > 0.0 {
                magnitude / grand_total * 100.0
            } else {
                0.0
            };
            CategoryShare {
                id: item.id,
                name: item.name.clone(),
                color: item.color.clone(),
                total: item.total,
                magnitude,
                percent: exact_percent.round() as u32,
                exact_percent,
            }
        })
        .collect()
}

/// Shift each RGB channel of a `#rrggbb` color by `amount`, clamping to
/// `0..=255`. Colors in any other notation are returned unchanged.
pub fn adjust_color(color: &str, amount: i32) -> String {
    let hex = color.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return color.to_string();
    }

    let mut adjusted = String::from("#");
    for i in (0..6).step_by(2) {
        let channel = match u8::from_str_radix(&hex[i..i + 2], 16) {
            Ok(channel) => channel,
            Err(_) => return color.to_string(),
        };
        let shifted = (channel as i32 + amount).clamp(0, 255);
        adjusted.push_str(&format!("{:02x}", shifted));
    }
    adjusted
}

/// Parse `#rrggbb` into RGB components
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Geometry and styling of one donut segment.
///
/// Angles are in radians, measured clockwise from the top of the circle.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub category_id: CategoryId,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Segment color as sent by the backend
    pub fill: String,
    /// Darkened variant used for the gradient edge
    pub edge: String,
    pub label: Option<String>,
    pub highlighted: bool,
}

impl DonutSegment {
    /// Angle at the middle of the segment, where its label is placed
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// A fully built category chart
#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    pub shares: Vec<CategoryShare>,
    pub segments: Vec<DonutSegment>,
    pub highlighted: Option<CategoryId>,
}

impl DonutChart {
    pub fn new(data: &[CategoryTotal]) -> Self {
        let shares = shares(data);
        let grand_total: f64 = shares.iter().map(|share| share.magnitude).sum();

        let mut segments = Vec::with_capacity(shares.len());
        if grand_total > 0.0 {
            let mut cursor = 0.0;
            for share in &shares {
                let sweep = share.magnitude / grand_total * TAU;
                segments.push(DonutSegment {
                    category_id: share.id,
                    start_angle: cursor,
                    end_angle: cursor + sweep,
                    fill: share.color.clone(),
                    edge: adjust_color(&share.color, GRADIENT_SHIFT),
                    label: share.data_label(),
                    highlighted: false,
                });
                cursor += sweep;
            }
        }

        Self {
            shares,
            segments,
            highlighted: None,
        }
    }

    /// Emphasize the segment of `category`, clearing any previous emphasis
    pub fn highlight(&mut self, category: Option<CategoryId>) {
        self.highlighted = category;
        for segment in &mut self.segments {
            segment.highlighted = Some(segment.category_id) == category;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment under a point given relative to the chart center, if the point
    /// lies on the ring between `inner_radius` and `outer_radius`
    pub fn segment_at(
        &self,
        dx: f64,
        dy: f64,
        inner_radius: f64,
        outer_radius: f64,
    ) -> Option<&DonutSegment> {
        let distance = dx.hypot(dy);
        if distance < inner_radius || distance > outer_radius {
            return None;
        }
        let angle = dx.atan2(-dy).rem_euclid(TAU);
        self.segments
            .iter()
            .find(|segment| angle >= segment.start_angle && angle < segment.end_angle)
    }

    pub fn share(&self, category: CategoryId) -> Option<&CategoryShare> {
        self.shares.iter().find(|share| share.id == category)
    }

    /// Legend entries in data order
    pub fn legend(&self) -> Vec<(String, String)> {
        self.shares
            .iter()
            .map(|share| (share.color.clone(), share.legend_label()))
            .collect()
    }
}

/// Convert a clockwise-from-top angle to a point on a circle
pub fn polar_point(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (center.0 + radius * theta.cos(), center.1 + radius * theta.sin())
}

/// One row of the list next to the chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListEntry {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    pub value_text: String,
    /// e.g. `60.00% do total`
    pub percent_text: String,
    /// Width of the proportional bar, in percent
    pub bar_width: f64,
}

pub fn list_entries(data: &[CategoryTotal]) -> Vec<CategoryListEntry> {
    shares(data)
        .into_iter()
        .map(|share| CategoryListEntry {
            id: share.id,
            value_text: format_currency(share.total),
            percent_text: format!("{}% do total", format_percent(share.exact_percent)),
            bar_width: share.exact_percent,
            name: share.name,
            color: share.color,
        })
        .collect()
}
