//! PAOH - Parallel Aggregated Ordered Hypergraph plots of dated events.
//!
//! Reads spreadsheet-style event rows, lays out one horizontal lane per
//! actor and one vertical span per multi-actor event, and renders the
//! result to SVG.

pub mod config;
pub mod export;
pub mod layout;
pub mod structure;

mod error;

pub use paoh_core::{color, dataset, draw, event, geometry, identifier};
pub use paoh_parser::Parsed;

pub use error::PaohError;

use log::{debug, info, trace, warn};

use config::AppConfig;
use dataset::Dataset;
use export::Exporter;
use layout::{Layout, LayoutContext, LayoutEngine};

/// Builder for parsing, laying out and rendering PAOH plots.
///
/// # Examples
///
/// ```rust,no_run
/// use paoh::{PlotBuilder, config::AppConfig};
///
/// let source = r#"[
///     {"proposal_no": "p1", "PI": "Ada", "date_submitted": "2020-01-10", "title": "Survey"},
///     {"proposal_no": "p1", "PI": "Grace"}
/// ]"#;
///
/// let builder = PlotBuilder::new(AppConfig::default());
/// let parsed = builder.parse(source).expect("Failed to parse");
/// let svg = builder
///     .render_svg(parsed.dataset())
///     .expect("Failed to render");
///
/// println!("{svg}");
/// ```
#[derive(Debug, Default)]
pub struct PlotBuilder {
    config: AppConfig,
}

impl PlotBuilder {
    /// Create a new plot builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse JSON rows into a dataset.
    ///
    /// Row-level problems are returned alongside the dataset as warnings;
    /// they never fail the parse.
    ///
    /// # Errors
    ///
    /// Returns [`PaohError::Parse`] if the document is not valid JSON, is not
    /// an array, or contains rows that are not flat objects.
    pub fn parse(&self, source: &str) -> Result<Parsed, PaohError> {
        info!("Parsing event rows");

        let parsed =
            paoh_parser::parse(source).map_err(|err| PaohError::new_parse_error(err, source))?;

        if !parsed.warnings().is_empty() {
            warn!(warnings_count = parsed.warnings().len(); "Rows normalized with warnings");
        }
        for diagnostic in parsed.warnings() {
            debug!(diagnostic:% = diagnostic; "Row warning");
        }
        debug!(
            events_count = parsed.dataset().events().len(),
            unscheduled_count = parsed.dataset().unscheduled().len();
            "Rows parsed"
        );
        trace!(dataset:? = parsed.dataset(); "Parsed dataset");

        Ok(parsed)
    }

    /// Compute the layout of `dataset` inside the configured plot area.
    ///
    /// # Errors
    ///
    /// Returns [`PaohError::Layout`] if the dataset is empty or the plot area
    /// or time domain is degenerate.
    pub fn layout(&self, dataset: &Dataset) -> Result<Layout, PaohError> {
        let context = LayoutContext::new(
            self.config.layout().clone(),
            self.config.canvas().plot_size(),
        );
        let layout = LayoutEngine::new(context).run(dataset)?;
        Ok(layout)
    }

    /// Lay out `dataset` and render it to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`PaohError::Layout`] for layout failures and
    /// [`PaohError::Export`] if the style is invalid or rendering fails.
    pub fn render_svg(&self, dataset: &Dataset) -> Result<String, PaohError> {
        let layout = self.layout(dataset)?;

        let exporter = export::svg::SvgBuilder::new()
            .with_canvas(self.config.canvas())
            .with_style(self.config.style())
            .with_tick_interval(self.config.layout().tick_interval_months())
            .build()?;

        let mut buffer = Vec::new();
        exporter.export_layout(&layout, &mut buffer)?;
        let svg = String::from_utf8(buffer)
            .map_err(|err| PaohError::Export(Box::new(err)))?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
