#![forbid(unsafe_code)]

//! Chart collaborator contract.
//!
//! The page does not draw charts. It hands a [`ChartSpec`] to whatever
//! implements [`Chart`]: a JS charting library behind a binding, an SVG
//! writer, or a test recorder. A spec is plain data (kind, series, geometry,
//! and the data rows already serialized to JSON objects) so equal input
//! always produces an equal spec and an identical JSON payload.

use serde::Serialize;
use serde_json::Value;

/// Chart family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Bars; horizontal when [`ChartGeometry::vertical_layout`] is set.
    Bar,
    /// Filled area under each series.
    Area,
    /// Polar radar over the category axis.
    Radar,
}

/// Layout options passed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartGeometry {
    /// Plot height in CSS pixels.
    pub height_px: u32,
    /// Categories on the vertical axis (bars grow left to right).
    pub vertical_layout: bool,
    /// Fixed value-axis domain; `None` lets the renderer pick.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<(f64, f64)>,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            height_px: 300,
            vertical_layout: false,
            domain: None,
        }
    }
}

impl ChartGeometry {
    /// Set the plot height.
    #[must_use]
    pub fn with_height(mut self, height_px: u32) -> Self {
        self.height_px = height_px;
        self
    }

    /// Put categories on the vertical axis.
    #[must_use]
    pub fn with_vertical_layout(mut self, vertical: bool) -> Self {
        self.vertical_layout = vertical;
        self
    }

    /// Fix the value-axis domain.
    #[must_use]
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some((min, max));
        self
    }
}

/// One plotted series: a numeric field of each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    /// Row field holding the value.
    pub key: &'static str,
    /// Legend text.
    pub label: &'static str,
    /// CSS color.
    pub color: &'static str,
}

impl ChartSeries {
    /// Create a series.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, color: &'static str) -> Self {
        Self { key, label, color }
    }
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Chart family.
    pub kind: ChartKind,
    /// Row field used for the category axis.
    pub category_key: &'static str,
    /// Series in legend order.
    pub series: Vec<ChartSeries>,
    /// Layout options.
    pub geometry: ChartGeometry,
    /// Data rows as JSON objects, in input order.
    pub rows: Vec<Value>,
}

impl ChartSpec {
    /// Build a spec by serializing `rows`.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if a row cannot be represented as JSON.
    pub fn from_rows<T: Serialize>(
        kind: ChartKind,
        category_key: &'static str,
        rows: &[T],
    ) -> Result<Self, serde_json::Error> {
        let rows = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            kind,
            category_key,
            series: Vec::new(),
            geometry: ChartGeometry::default(),
            rows,
        })
    }

    /// Append a series.
    #[must_use]
    pub fn with_series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }

    /// Replace the geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: ChartGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Category values in row order; rows missing the key are skipped.
    pub fn categories(&self) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().filter_map(|row| row.get(self.category_key))
    }

    /// Serialize the spec for a JS renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (non-finite domain bounds are
    /// written as `null` rather than failing).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A renderer that draws chart specs.
pub trait Chart {
    /// What rendering produces (a handle, markup, a draw count).
    type Output;

    /// Draw `spec`. Equal specs must produce equal output.
    fn render(&mut self, spec: &ChartSpec) -> Self::Output;
}
