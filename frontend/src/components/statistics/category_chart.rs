use std::f64::consts::TAU;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use shared::chart::{parse_hex_color, polar_point, DonutChart, DonutSegment, CUTOUT_RATIO, EMPTY_MESSAGE};
use shared::{CategoryId, CategoryTotal};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;

const CANVAS_SIZE: u32 = 400;
const OUTER_RADIUS: f64 = 170.0;
/// Extra radius of the emphasized segment
const HOVER_OFFSET: f64 = 10.0;
/// Width of the darker band along the outer edge of each segment
const EDGE_WIDTH: f64 = 12.0;
const FALLBACK_RGB: (u8, u8, u8) = (0x6c, 0x75, 0x7d);

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub data: Vec<CategoryTotal>,
    /// Changes on every breakdown reload; a new value rebuilds the chart
    pub generation: u64,
    /// Category emphasized from outside the chart (list hover)
    pub highlighted: Option<CategoryId>,
}

pub enum Msg {
    Pointer(Option<(f64, f64)>),
}

pub struct CategoryChart {
    canvas_ref: NodeRef,
    chart: DonutChart,
    generation: u64,
    /// Segment under the mouse pointer
    hovered: Option<CategoryId>,
}

impl Component for CategoryChart {
    type Message = Msg;
    type Properties = CategoryChartProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut chart = DonutChart::new(&props.data);
        chart.highlight(props.highlighted);

        Self {
            canvas_ref: NodeRef::default(),
            chart,
            generation: props.generation,
            hovered: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Pointer(position) => {
                let hovered = position.and_then(|(x, y)| {
                    let center = Self::center();
                    self.chart
                        .segment_at(x - center.0, y - center.1, Self::inner_radius(), OUTER_RADIUS + HOVER_OFFSET)
                        .map(|segment| segment.category_id)
                });
                if hovered == self.hovered {
                    return false;
                }
                self.hovered = hovered;
                self.chart.highlight(self.hovered.or(ctx.props().highlighted));
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.generation != self.generation {
            Logger::debug_with_component(
                "CategoryChart",
                &format!("rebuilding chart with {} categories", props.data.len()),
            );
            self.chart = DonutChart::new(&props.data);
            self.generation = props.generation;
            self.hovered = None;
        }
        self.chart.highlight(self.hovered.or(props.highlighted));
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !self.chart.is_empty() {
            self.draw_chart();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.chart.is_empty() {
            return html! {
                <div class="chart-empty">
                    <i class="fas fa-chart-pie chart-empty-icon"></i>
                    <p>{EMPTY_MESSAGE}</p>
                </div>
            };
        }

        let link = ctx.link();
        let onmousemove = link.callback(|e: MouseEvent| {
            Msg::Pointer(Some((e.offset_x() as f64, e.offset_y() as f64)))
        });
        let onmouseleave = link.callback(|_: MouseEvent| Msg::Pointer(None));

        let tooltip = self
            .hovered
            .and_then(|id| self.chart.share(id))
            .map(|share| html! { <div class="chart-tooltip">{share.tooltip_label()}</div> })
            .unwrap_or_default();

        html! {
            <div class="chart-container">
                <canvas
                    id="grafico-categorias"
                    ref={self.canvas_ref.clone()}
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                    {onmousemove}
                    {onmouseleave}
                ></canvas>
                {tooltip}
                <ul class="chart-legend">
                    {for self.chart.legend().into_iter().map(|(color, label)| html! {
                        <li>
                            <span class="legend-swatch" style={format!("background-color: {}", color)}></span>
                            {label}
                        </li>
                    })}
                </ul>
            </div>
        }
    }
}

impl CategoryChart {
    fn center() -> (f64, f64) {
        let half = CANVAS_SIZE as f64 / 2.0;
        (half, half)
    }

    fn inner_radius() -> f64 {
        OUTER_RADIUS * CUTOUT_RATIO
    }

    fn draw_chart(&self) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => {
                Logger::warn_with_component("CategoryChart", "canvas has no 2d context");
                return;
            }
        };

        let root = backend.into_drawing_area();
        if let Err(e) = self.paint(&root) {
            Logger::error_with_component("CategoryChart", &format!("failed to draw chart: {:?}", e));
        }
    }

    fn paint<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let center = Self::center();
        let inner = Self::inner_radius();

        for segment in &self.chart.segments {
            let outer = if segment.highlighted {
                OUTER_RADIUS + HOVER_OFFSET
            } else {
                OUTER_RADIUS
            };
            let fill = rgb(&segment.fill);
            let edge = rgb(&segment.edge);

            let body = ring_points(center, inner, outer, segment);
            root.draw(&Polygon::new(body.clone(), fill.filled()))?;
            root.draw(&Polygon::new(ring_points(center, outer - EDGE_WIDTH, outer, segment), edge.filled()))?;

            let mut outline = body;
            if let Some(first) = outline.first().copied() {
                outline.push(first);
            }
            root.draw(&PathElement::new(outline, WHITE.stroke_width(2)))?;
        }

        let label_style = ("sans-serif", 14)
            .into_font()
            .style(FontStyle::Bold)
            .color(&WHITE)
            .pos(Pos::new(HPos::Center, VPos::Center));

        for segment in &self.chart.segments {
            if let Some(label) = &segment.label {
                let radius = (inner + OUTER_RADIUS) / 2.0;
                let (x, y) = polar_point(center, radius, segment.mid_angle());
                root.draw(&Text::new(label.clone(), (x as i32, y as i32), label_style.clone()))?;
            }
        }

        root.present()
    }
}

fn rgb(color: &str) -> RGBColor {
    let (r, g, b) = parse_hex_color(color).unwrap_or(FALLBACK_RGB);
    RGBColor(r, g, b)
}

/// Outline of a ring sector: outer arc clockwise, inner arc back
fn ring_points(center: (f64, f64), inner: f64, outer: f64, segment: &DonutSegment) -> Vec<(i32, i32)> {
    let steps = ((segment.sweep() / TAU) * 180.0).ceil().max(2.0) as usize;
    let angle_at = |i: usize| segment.start_angle + segment.sweep() * i as f64 / steps as f64;

    let to_pixel = |(x, y): (f64, f64)| (x.round() as i32, y.round() as i32);
    let outer_arc = (0..=steps).map(|i| to_pixel(polar_point(center, outer, angle_at(i))));
    let inner_arc = (0..=steps).rev().map(|i| to_pixel(polar_point(center, inner, angle_at(i))));

    outer_arc.chain(inner_arc).collect()
}


#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_draw_without_canvas_is_noop() {
        let chart = CategoryChart {
            canvas_ref: NodeRef::default(),
            chart: DonutChart::new(&[]),
            generation: 0,
            hovered: None,
        };
        chart.draw_chart();
    }
}
