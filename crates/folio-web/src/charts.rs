#![forbid(unsafe_code)]

//! Chart specs for the report's figures.
//!
//! Two figures sit in the models section (architecture profile bars and the
//! publication trend) and one in the evaluation section (dimension radar).

use folio_content::evaluation::{EVALUATION_DIMENSIONS, RadarPoint};
use folio_content::models::{ARCHITECTURES, CITATION_TRENDS};
use folio_core::viewport::SectionId;
use folio_widgets::chart::{Chart, ChartGeometry, ChartKind, ChartSeries, ChartSpec};

const CORAL: &str = "oklch(0.65 0.2 25)";
const BLUE: &str = "oklch(0.55 0.15 250)";
const GREEN: &str = "oklch(0.6 0.15 150)";
const AMBER: &str = "oklch(0.7 0.12 60)";

/// Horizontal bars scoring each architecture family 0..=100.
pub fn architecture_chart() -> Result<ChartSpec, serde_json::Error> {
    Ok(ChartSpec::from_rows(ChartKind::Bar, "type", ARCHITECTURES)?
        .with_series(ChartSeries::new("diversityScore", "多样性", CORAL))
        .with_series(ChartSeries::new("qualityScore", "质量", BLUE))
        .with_series(ChartSeries::new("speedScore", "速度", GREEN))
        .with_series(ChartSeries::new("stabilityScore", "稳定性", AMBER))
        .with_geometry(
            ChartGeometry::default()
                .with_height(360)
                .with_vertical_layout(true)
                .with_domain(0.0, 100.0),
        ))
}

/// Stacked-area publication counts per year.
pub fn citation_trend_chart() -> Result<ChartSpec, serde_json::Error> {
    Ok(ChartSpec::from_rows(ChartKind::Area, "year", CITATION_TRENDS)?
        .with_series(ChartSeries::new("llm", "LLM", CORAL))
        .with_series(ChartSeries::new("diffusion", "扩散模型", BLUE))
        .with_series(ChartSeries::new("gan", "GAN", GREEN))
        .with_series(ChartSeries::new("vae", "VAE", AMBER))
        .with_geometry(ChartGeometry::default().with_height(320)))
}

/// Radar of evaluation dimension weights.
pub fn evaluation_radar_chart() -> Result<ChartSpec, serde_json::Error> {
    let rows: Vec<RadarPoint> = EVALUATION_DIMENSIONS
        .iter()
        .map(|d| d.radar_point())
        .collect();
    Ok(ChartSpec::from_rows(ChartKind::Radar, "subject", &rows)?
        .with_series(ChartSeries::new("value", "重要性", CORAL))
        .with_geometry(
            ChartGeometry::default()
                .with_height(360)
                .with_domain(0.0, 100.0),
        ))
}

/// Every figure with the section that hosts it, in document order.
pub fn report_charts() -> Result<Vec<(SectionId, ChartSpec)>, serde_json::Error> {
    Ok(vec![
        (SectionId::new("models"), architecture_chart()?),
        (SectionId::new("models"), citation_trend_chart()?),
        (SectionId::new("evaluation"), evaluation_radar_chart()?),
    ])
}

/// Hand every figure to `chart`, returning its outputs in document order.
pub fn render_all<C: Chart>(chart: &mut C) -> Result<Vec<C::Output>, serde_json::Error> {
    Ok(report_charts()?
        .iter()
        .map(|(_, spec)| chart.render(spec))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct KindRecorder;

    impl Chart for KindRecorder {
        type Output = (ChartKind, usize);

        fn render(&mut self, spec: &ChartSpec) -> Self::Output {
            (spec.kind, spec.row_count())
        }
    }

    #[test]
    fn all_figures_render_in_order() {
        let outputs = render_all(&mut KindRecorder).unwrap();
        assert_eq!(
            outputs,
            vec![
                (ChartKind::Bar, 4),
                (ChartKind::Area, 6),
                (ChartKind::Radar, 6),
            ]
        );
    }

    #[test]
    fn architecture_bars_are_vertical_layout() {
        let spec = architecture_chart().unwrap();
        assert!(spec.geometry.vertical_layout);
        assert_eq!(spec.geometry.domain, Some((0.0, 100.0)));
        assert_eq!(spec.rows[2]["speedScore"], json!(45));
    }

    #[test]
    fn radar_rows_carry_full_mark() {
        let spec = evaluation_radar_chart().unwrap();
        assert_eq!(
            spec.rows[0],
            json!({"subject": "抗菌活性", "value": 95, "fullMark": 100})
        );
    }

    #[test]
    fn payload_is_stable() {
        let a = citation_trend_chart().unwrap().to_json().unwrap();
        let b = citation_trend_chart().unwrap().to_json().unwrap();
        assert_eq!(a, b);
    }
}
