use crate::domain::model::PredictionReport;
use std::fmt::Write;

/// 終端機用的文字報告
pub fn render_text(report: &PredictionReport) -> String {
    let mut out = String::new();
    let result = &report.result;

    let _ = writeln!(out, "🌱 Prediction Results");
    let _ = writeln!(out, "   Location:        {}", report.location);
    let _ = writeln!(
        out,
        "   Crop / season:   {} / {}",
        report.request.crop_type(),
        report.request.season()
    );
    let _ = writeln!(out, "   Area:            {} ha", report.request.area());
    let _ = writeln!(
        out,
        "   Predicted yield: {:.2} tonnes/hectare",
        result.predicted_yield
    );
    let _ = writeln!(out, "   Total yield:     {:.2} tonnes", report.total_yield);
    let _ = writeln!(
        out,
        "   Confidence:      {:.1}% ({})",
        result.confidence,
        report.confidence_level.interpretation()
    );

    if !result.data_sources_used.is_empty() {
        let _ = writeln!(out, "   Data sources:    {}", result.data_sources_used.join(", "));
    }

    if !result.feature_contributions.is_empty() {
        let _ = writeln!(out, "   Feature importance:");
        for feature in &result.feature_contributions {
            let _ = writeln!(out, "     {:<14} {:>5.1}%", feature.name, feature.value * 100.0);
        }
    }

    if !result.historical_comparison.is_empty() {
        let _ = writeln!(out, "   Historical trend:");
        for point in &result.historical_comparison {
            let _ = writeln!(out, "     {:<14} {:.2} t/ha", point.period, point.yield_value);
        }
    }

    out
}
