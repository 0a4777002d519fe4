//! Configuration types for PAOH plot layout and rendering.
//!
//! This module provides configuration structures that control how plots
//! are laid out, sized and styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources, and
//! every field has a default so partial configuration files work.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Deconfliction spacing, rank spacing and time axis padding.
//! - [`SimulationConfig`] - Constants of the force simulation ordering the lanes.
//! - [`CanvasConfig`] - Output size and margins.
//! - [`StyleConfig`] - Colors, stroke widths and font sizes.
//!
//! # Example
//!
//! ```
//! # use paoh::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().simulation().iterations(), 300);
//! assert!(config.style().lane_color().is_ok());
//! ```

use serde::Deserialize;

use paoh_core::{
    color::Color,
    geometry::{Insets, Size},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self {
            layout,
            canvas,
            style,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the canvas size, keeping margins.
    pub fn with_canvas_size(mut self, width: f32, height: f32) -> Self {
        self.canvas.width = width;
        self.canvas.height = height;
        self
    }
}

/// Layout pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Step between events spread apart from a shared date, in days.
    spread_step_days: u32,

    /// Minimum distance between consecutive events, in days.
    min_spacing_days: u32,

    /// Distance between consecutive temporal ranks in simulation space.
    rank_spacing: f64,

    /// Calendar months added before the first and after the last event.
    domain_padding_months: u32,

    /// Months between time axis ticks.
    tick_interval_months: u32,

    simulation: SimulationConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spread_step_days: 5,
            min_spacing_days: 3,
            rank_spacing: 10.0,
            domain_padding_months: 1,
            tick_interval_months: 3,
            simulation: SimulationConfig::default(),
        }
    }
}

impl LayoutConfig {
    pub fn spread_step_days(&self) -> u32 {
        self.spread_step_days
    }

    pub fn min_spacing_days(&self) -> u32 {
        self.min_spacing_days
    }

    pub fn rank_spacing(&self) -> f64 {
        self.rank_spacing
    }

    pub fn domain_padding_months(&self) -> u32 {
        self.domain_padding_months
    }

    pub fn tick_interval_months(&self) -> u32 {
        self.tick_interval_months
    }

    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    /// Sets the spread step and minimum spacing, in days.
    pub fn with_spacing(mut self, spread_step_days: u32, min_spacing_days: u32) -> Self {
        self.spread_step_days = spread_step_days;
        self.min_spacing_days = min_spacing_days;
        self
    }

    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }
}

/// Force simulation constants.
///
/// The simulation runs in one dimension. Each step cools `alpha` from 1
/// toward 0, applies link, repulsion and anchor forces scaled by `alpha`,
/// then damps velocities by `velocity_decay`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    iterations: usize,
    link_strength: f64,
    link_distance: f64,
    charge_strength: f64,
    /// Pairs closer than this are treated as this far apart by the charge force.
    charge_min_distance: f64,
    anchor_strength: f64,
    velocity_decay: f64,
    /// `alpha` reached after `iterations` steps.
    alpha_min: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 300,
            link_strength: 0.1,
            link_distance: 30.0,
            charge_strength: -2.0,
            charge_min_distance: 1.0,
            anchor_strength: 0.5,
            velocity_decay: 0.4,
            alpha_min: 0.001,
        }
    }
}

impl SimulationConfig {
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn link_strength(&self) -> f64 {
        self.link_strength
    }

    pub fn link_distance(&self) -> f64 {
        self.link_distance
    }

    pub fn charge_strength(&self) -> f64 {
        self.charge_strength
    }

    pub fn charge_min_distance(&self) -> f64 {
        self.charge_min_distance
    }

    pub fn anchor_strength(&self) -> f64 {
        self.anchor_strength
    }

    pub fn velocity_decay(&self) -> f64 {
        self.velocity_decay
    }

    pub fn alpha_min(&self) -> f64 {
        self.alpha_min
    }

    /// Per-step cooling rate, chosen so that `alpha` reaches `alpha_min`
    /// after `iterations` steps.
    pub fn alpha_decay(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        1.0 - self.alpha_min.powf(1.0 / self.iterations as f64)
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_link_strength(mut self, strength: f64) -> Self {
        self.link_strength = strength;
        self
    }
}

/// Output canvas size and margins, in pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
    margin_top: f32,
    margin_right: f32,
    margin_bottom: f32,
    /// Leaves room for the actor labels left of the earliest lanes.
    margin_left: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            margin_top: 30.0,
            margin_right: 20.0,
            margin_bottom: 20.0,
            margin_left: 150.0,
        }
    }
}

impl CanvasConfig {
    /// Returns the full canvas size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the margins around the plot area.
    pub fn margins(&self) -> Insets {
        Insets::new(
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
        )
    }

    /// Returns the size of the plot area: the canvas minus its margins.
    pub fn plot_size(&self) -> Size {
        self.size().shrink(self.margins())
    }
}

/// Visual styling configuration.
///
/// Colors are CSS color strings, validated when the renderer is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    lane_color: String,
    lane_width: f32,
    span_color: String,
    span_width: f32,
    span_opacity: f32,
    marker_radius: f32,
    marker_fill: String,
    marker_stroke: String,
    marker_stroke_width: f32,
    axis_color: String,
    font_family: String,
    label_font_size: f32,
    axis_font_size: f32,
    /// Gap between an actor label and the start of its lane.
    label_gap: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: Some("white".to_string()),
            lane_color: "#ccc".to_string(),
            lane_width: 2.0,
            span_color: "black".to_string(),
            span_width: 1.5,
            span_opacity: 0.6,
            marker_radius: 3.0,
            marker_fill: "white".to_string(),
            marker_stroke: "black".to_string(),
            marker_stroke_width: 1.5,
            axis_color: "black".to_string(),
            font_family: "sans-serif".to_string(),
            label_font_size: 12.0,
            axis_font_size: 12.0,
            label_gap: 10.0,
        }
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {name} in config: {err}"))
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` for a transparent
    /// background.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background color", color))
            .transpose()
    }

    /// Sets the background color; `None` leaves the background transparent.
    pub fn with_background_color(mut self, color: Option<&str>) -> Self {
        self.background_color = color.map(str::to_string);
        self
    }

    pub fn with_lane_color(mut self, color: &str) -> Self {
        self.lane_color = color.to_string();
        self
    }

    pub fn lane_color(&self) -> Result<Color, String> {
        parse_color("lane color", &self.lane_color)
    }

    pub fn lane_width(&self) -> f32 {
        self.lane_width
    }

    /// Returns the span color with the configured opacity applied.
    pub fn span_color(&self) -> Result<Color, String> {
        parse_color("span color", &self.span_color).map(|color| color.with_alpha(self.span_opacity))
    }

    pub fn span_width(&self) -> f32 {
        self.span_width
    }

    pub fn marker_radius(&self) -> f32 {
        self.marker_radius
    }

    pub fn marker_fill(&self) -> Result<Color, String> {
        parse_color("marker fill", &self.marker_fill)
    }

    pub fn marker_stroke(&self) -> Result<Color, String> {
        parse_color("marker stroke", &self.marker_stroke)
    }

    pub fn marker_stroke_width(&self) -> f32 {
        self.marker_stroke_width
    }

    pub fn axis_color(&self) -> Result<Color, String> {
        parse_color("axis color", &self.axis_color)
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn label_font_size(&self) -> f32 {
        self.label_font_size
    }

    pub fn axis_font_size(&self) -> f32 {
        self.axis_font_size
    }

    pub fn label_gap(&self) -> f32 {
        self.label_gap
    }
}
