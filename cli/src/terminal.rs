//! Plain-text and JSON renderings of a [`ResultView`].

use serde_json::{Value, json};
use shared::ResultView;
use shared::view::{
    ADVISORY_TEXT, ANALYZING_TEXT, IDLE_PROMPT, LOW_CONFIDENCE_HEADLINE, LOW_CONFIDENCE_HINT,
    NO_PROPERTIES_TEXT,
};
use std::fmt::Write as _;

pub fn render_view(view: &ResultView<'_>) -> String {
    let mut out = String::new();

    match view {
        ResultView::Idle => out.push_str(IDLE_PROMPT),
        ResultView::Analyzing => out.push_str(ANALYZING_TEXT),
        ResultView::Failed { message } => out.push_str(message),
        ResultView::ResolvedLow { .. } => {
            let _ = write!(out, "{}\n{}", LOW_CONFIDENCE_HEADLINE, LOW_CONFIDENCE_HINT);
        }
        ResultView::ResolvedHigh(details) => {
            let _ = writeln!(out, "Leaf Category: {}", details.class_label);
            let _ = writeln!(out, "Scientific Name: {}", details.scientific_name);
            let _ = writeln!(out, "Confidence: {}%", details.confidence);
            out.push_str("Medicinal Properties:");
            if details.properties.is_empty() {
                let _ = write!(out, "\n  {}", NO_PROPERTIES_TEXT);
            }
            for property in details.properties {
                let _ = write!(out, "\n  - {}", property);
            }
        }
    }

    if view.shows_advisory() {
        let _ = write!(out, "\n\n! {}", ADVISORY_TEXT);
    }
    out.push('\n');
    out
}

pub fn view_json(view: &ResultView<'_>) -> Value {
    let stage = view.stage().to_string();
    match view {
        ResultView::Idle | ResultView::Analyzing => json!({ "stage": stage }),
        ResultView::Failed { message } => json!({ "stage": stage, "message": message }),
        ResultView::ResolvedLow {
            confidence,
            advisory,
        } => json!({
            "stage": stage,
            "confidence": confidence.as_str(),
            "advisory": advisory,
        }),
        ResultView::ResolvedHigh(details) => json!({
            "stage": stage,
            "class": details.class_label,
            "scientific_name": details.scientific_name,
            "confidence": details.confidence.as_str(),
            "properties": details.properties,
            "advisory": details.advisory,
            "exportable": view.can_export(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{
        ANALYSIS_FAILED_MESSAGE, FailureResult, InferenceResult, PropertyCatalog, Session,
        result_view,
    };

    fn resolved(label: &str, confidence: f64, catalog: &PropertyCatalog) -> Session<(), ()> {
        let mut session = Session::new();
        let generation = session.select_file((), |_| ());
        session.complete(
            generation,
            Ok(InferenceResult::new(label, confidence)),
            catalog,
        );
        session
    }

    #[test]
    fn renders_full_result_with_advisory() {
        let catalog = PropertyCatalog::bundled().unwrap();
        let session = resolved("Neem", 0.65, &catalog);
        let text = render_view(&result_view(&session, &catalog));

        assert!(text.starts_with("Leaf Category: Neem\n"));
        assert!(text.contains("Scientific Name: Azadirachta indica"));
        assert!(text.contains("Confidence: 65.00%"));
        assert!(text.contains("  - Antibacterial"));
        assert!(text.contains(ADVISORY_TEXT));
    }

    #[test]
    fn low_confidence_hides_details() {
        let catalog = PropertyCatalog::bundled().unwrap();
        let session = resolved("Neem", 0.42, &catalog);
        let text = render_view(&result_view(&session, &catalog));

        assert!(text.starts_with(LOW_CONFIDENCE_HEADLINE));
        assert!(!text.contains("Azadirachta"));
        assert!(!text.contains("Antibacterial"));
    }

    #[test]
    fn unknown_label_lists_no_properties() {
        let catalog = PropertyCatalog::bundled().unwrap();
        let session = resolved("Foo", 0.95, &catalog);
        let text = render_view(&result_view(&session, &catalog));

        assert!(text.contains("Scientific Name: Unknown"));
        assert!(text.contains(NO_PROPERTIES_TEXT));
        assert!(!text.contains(ADVISORY_TEXT));
    }

    #[test]
    fn failure_json_carries_generic_message() {
        let catalog = PropertyCatalog::default();
        let mut session: Session<(), ()> = Session::new();
        let generation = session.select_file((), |_| ());
        session.complete(generation, Err(FailureResult::analysis_failed()), &catalog);

        let value = view_json(&result_view(&session, &catalog));
        assert_eq!(value["stage"], "failed");
        assert_eq!(value["message"], ANALYSIS_FAILED_MESSAGE);
    }

    #[test]
    fn resolved_json_lists_properties() {
        let catalog = PropertyCatalog::bundled().unwrap();
        let session = resolved("Tulsi", 0.9, &catalog);
        let value = view_json(&result_view(&session, &catalog));

        assert_eq!(value["stage"], "resolved-high");
        assert_eq!(value["class"], "Tulsi");
        assert_eq!(value["confidence"], "90.00");
        assert_eq!(value["exportable"], true);
        assert!(value["properties"].as_array().is_some_and(|p| !p.is_empty()));
    }
}
