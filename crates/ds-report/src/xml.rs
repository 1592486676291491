//! XML encoder.
//!
//! Hand-built serialization into a fixed element tree: no declaration, no
//! namespace, two-space indent per nesting level. Well-formedness is the
//! only correctness property; there is no schema.
//!
//! Every text node goes through [`escape_text`], not just the free-form
//! fields, so any text field added later cannot inject markup into the
//! document.

use chrono::SecondsFormat;

use crate::document::ReportDocument;

/// Serialize the document to XML bytes.
pub fn encode(doc: &ReportDocument) -> Vec<u8> {
    let mut xml = String::new();

    xml.push_str("<report>\n");
    elem(&mut xml, 1, "report_id", &doc.report_id.to_string());
    elem(&mut xml, 1, "title", &doc.title);
    elem(&mut xml, 1, "report_type", &doc.report_type.to_string());
    elem(
        &mut xml,
        1,
        "generated_at",
        &doc.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    );

    xml.push_str("  <summary>\n");
    elem(
        &mut xml,
        2,
        "total_predictions",
        &doc.summary.total_predictions.to_string(),
    );
    elem(&mut xml, 2, "high_risk", &doc.summary.high_risk.to_string());
    elem(
        &mut xml,
        2,
        "critical_issues",
        &doc.summary.critical_issues.to_string(),
    );
    elem(&mut xml, 2, "resolved", &doc.summary.resolved.to_string());
    xml.push_str("  </summary>\n");

    xml.push_str("  <metrics>\n");
    elem(
        &mut xml,
        2,
        "defect_probability_avg",
        &doc.metrics.defect_probability_avg.to_string(),
    );
    let dist = &doc.metrics.risk_distribution;
    xml.push_str("    <risk_distribution>\n");
    xml.push_str(&format!(
        "      <low>{}</low><medium>{}</medium><high>{}</high><critical>{}</critical>\n",
        dist.low, dist.medium, dist.high, dist.critical
    ));
    xml.push_str("    </risk_distribution>\n");
    xml.push_str("  </metrics>\n");

    xml.push_str("  <top_risk_features>\n");
    for feature in &doc.top_risk_features {
        xml.push_str(&format!(
            "    <feature><name>{}</name><avg_value>{}</avg_value><impact>{}</impact></feature>\n",
            escape_text(&feature.feature_name),
            feature.avg_value,
            escape_text(&feature.impact.to_string()),
        ));
    }
    xml.push_str("  </top_risk_features>\n");

    xml.push_str("</report>\n");
    xml.into_bytes()
}

fn elem(xml: &mut String, depth: usize, name: &str, text: &str) {
    for _ in 0..depth {
        xml.push_str("  ");
    }
    xml.push('<');
    xml.push_str(name);
    xml.push('>');
    xml.push_str(&escape_text(text));
    xml.push_str("</");
    xml.push_str(name);
    xml.push_str(">\n");
}

/// Escape XML special characters in a text node.
///
/// Ampersand substitution runs first so already-inserted entities are not
/// double-escaped.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ReportDocument;
    use ds_common::demo;

    fn demo_doc() -> ReportDocument {
        let report = demo::reports().remove(0);
        ReportDocument::compose(&report, &demo::summary())
    }

    #[test]
    fn test_escape_order_ampersand_first() {
        assert_eq!(
            escape_text("A & B <script>"),
            "A &amp; B &lt;script&gt;"
        );
        assert_eq!(escape_text("&lt;"), "&amp;lt;");
        assert_eq!(escape_text(r#"he said "hi""#), "he said &quot;hi&quot;");
        assert_eq!(escape_text("it's"), "it&apos;s");
    }

    #[test]
    fn test_safe_title_passes_through() {
        let mut doc = demo_doc();
        doc.title = "Plain Title 42".to_string();
        let xml = String::from_utf8(encode(&doc)).unwrap();
        assert!(xml.contains("<title>Plain Title 42</title>"));
    }

    #[test]
    fn test_reserved_title_is_escaped() {
        let mut doc = demo_doc();
        doc.title = "A & B <script>".to_string();
        let xml = String::from_utf8(encode(&doc)).unwrap();
        assert!(xml.contains("<title>A &amp; B &lt;script&gt;</title>"));
        assert!(!xml.contains("<script>"));
    }

    #[test]
    fn test_fixed_tree_layout() {
        let xml = String::from_utf8(encode(&demo_doc())).unwrap();

        assert!(xml.starts_with("<report>\n  <report_id>1</report_id>\n"));
        assert!(xml.contains("  <generated_at>2024-01-15T10:00:00Z</generated_at>\n"));
        assert!(xml.contains("    <total_predictions>1234</total_predictions>\n"));
        assert!(xml.contains(
            "      <low>58</low><medium>22</medium><high>10</high><critical>10</critical>\n"
        ));
        assert!(xml.contains("    <defect_probability_avg>0.75</defect_probability_avg>\n"));
        assert!(xml.ends_with("</report>\n"));
    }

    #[test]
    fn test_feature_order_preserved() {
        let xml = String::from_utf8(encode(&demo_doc())).unwrap();
        let names = ["v(g)", "loc", "branchCount", "num_functions"];
        let positions: Vec<_> = names
            .iter()
            .map(|n| {
                xml.find(&format!("<name>{n}</name>"))
                    .unwrap_or_else(|| panic!("missing feature {n}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_balanced_tags() {
        let xml = String::from_utf8(encode(&demo_doc())).unwrap();
        for tag in [
            "report",
            "summary",
            "metrics",
            "risk_distribution",
            "top_risk_features",
            "feature",
            "name",
            "avg_value",
            "impact",
        ] {
            let opens = xml.matches(&format!("<{tag}>")).count();
            let closes = xml.matches(&format!("</{tag}>")).count();
            assert_eq!(opens, closes, "unbalanced <{tag}>");
        }
    }
}
