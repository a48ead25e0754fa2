//! Pure mapping from session state to what the result panel shows.

use crate::catalog::{NameContext, PropertyCatalog};
use crate::confidence::{FormattedConfidence, needs_advisory};
use crate::session::{Session, SessionStatus};
use strum_macros::{AsRefStr, Display};

pub const IDLE_PROMPT: &str = "Upload a leaf image to see analysis results";
pub const ANALYZING_TEXT: &str = "Analyzing leaf image...";
pub const LOW_CONFIDENCE_HEADLINE: &str = "Probably not a medicinal leaf";
pub const LOW_CONFIDENCE_HINT: &str = "Try uploading a clearer image for better results.";
pub const ADVISORY_TEXT: &str =
    "Low confidence detection. Consider uploading a clearer image with better lighting.";
pub const NO_PROPERTIES_TEXT: &str = "No medicinal properties listed.";

/// Stage names double as CSS modifiers in the web UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ResultStage {
    Idle,
    Analyzing,
    Failed,
    ResolvedLow,
    ResolvedHigh,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedDetails<'a> {
    pub class_label: &'a str,
    pub scientific_name: &'a str,
    pub confidence: &'a FormattedConfidence,
    pub properties: &'a [String],
    pub advisory: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultView<'a> {
    Idle,
    Analyzing,
    Failed {
        message: &'a str,
    },
    ResolvedLow {
        confidence: &'a FormattedConfidence,
        advisory: bool,
    },
    ResolvedHigh(ResolvedDetails<'a>),
}

impl ResultView<'_> {
    pub fn stage(&self) -> ResultStage {
        match self {
            ResultView::Idle => ResultStage::Idle,
            ResultView::Analyzing => ResultStage::Analyzing,
            ResultView::Failed { .. } => ResultStage::Failed,
            ResultView::ResolvedLow { .. } => ResultStage::ResolvedLow,
            ResultView::ResolvedHigh(_) => ResultStage::ResolvedHigh,
        }
    }

    /// The report can only be exported while the full result is showing.
    pub fn can_export(&self) -> bool {
        matches!(self, ResultView::ResolvedHigh(_))
    }

    pub fn shows_advisory(&self) -> bool {
        match self {
            ResultView::ResolvedLow { advisory, .. } => *advisory,
            ResultView::ResolvedHigh(details) => details.advisory,
            _ => false,
        }
    }
}

pub fn result_view<'a, F, P>(
    session: &'a Session<F, P>,
    catalog: &'a PropertyCatalog,
) -> ResultView<'a> {
    match session.status() {
        SessionStatus::Idle => ResultView::Idle,
        SessionStatus::Analyzing => ResultView::Analyzing,
        SessionStatus::Failed(failure) => ResultView::Failed {
            message: &failure.message,
        },
        SessionStatus::Resolved(resolution) => {
            let advisory = needs_advisory(resolution.result.confidence);
            if resolution.confidence.is_below_gate() {
                ResultView::ResolvedLow {
                    confidence: &resolution.confidence,
                    advisory,
                }
            } else {
                let label = resolution.result.class_label.as_str();
                ResultView::ResolvedHigh(ResolvedDetails {
                    class_label: label,
                    scientific_name: catalog.resolve_scientific_name(label, NameContext::Inline),
                    confidence: &resolution.confidence,
                    properties: &resolution.properties,
                    advisory,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ANALYSIS_FAILED_MESSAGE, FailureResult, InferenceResult};

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
    fn idle_and_analyzing() {
        let catalog = PropertyCatalog::bundled().unwrap();
        let mut session: Session<(), ()> = Session::new();
        assert_eq!(result_view(&session, &catalog), ResultView::Idle);

        session.select_file((), |_| ());
        let view = result_view(&session, &catalog);
        assert_eq!(view, ResultView::Analyzing);
        assert!(!view.can_export());
    }

    #[test]
    fn failure_shows_generic_message() {
        let catalog = PropertyCatalog::bundled().unwrap();
        let mut session: Session<(), ()> = Session::new();
        let generation = session.select_file((), |_| ());
        session.complete(generation, Err(FailureResult::analysis_failed()), &catalog);

        assert_eq!(
            result_view(&session, &catalog),
            ResultView::Failed {
                message: ANALYSIS_FAILED_MESSAGE
            }
        );
    }

    #[test]
    fn neem_at_sixty_five_shows_full_result_and_advisory() {
        let catalog = PropertyCatalog::bundled().unwrap();
        let session = resolved("Neem", 0.65, &catalog);

        match result_view(&session, &catalog) {
            ResultView::ResolvedHigh(details) => {
                assert_eq!(details.class_label, "Neem");
                assert_eq!(details.scientific_name, "Azadirachta indica");
                assert_eq!(details.confidence.as_str(), "65.00");
                assert!(!details.properties.is_empty());
                assert!(details.advisory);
            }
            other => panic!("expected full result, got {:?}", other),
        }
    }

    #[test]
    fn below_gate_hides_name_and_properties() {
        let catalog = PropertyCatalog::bundled().unwrap();
        let session = resolved("Neem", 0.4999, &catalog);
        assert!(!session.resolution().unwrap().properties.is_empty());

        let view = result_view(&session, &catalog);
        assert_eq!(view.stage(), ResultStage::ResolvedLow);
        assert!(!view.can_export());
        assert!(view.shows_advisory());
    }

    #[test]
    fn high_confidence_has_no_advisory() {
        let catalog = PropertyCatalog::bundled().unwrap();
        let session = resolved("Tulsi", 0.93, &catalog);
        let view = result_view(&session, &catalog);
        assert_eq!(view.stage(), ResultStage::ResolvedHigh);
        assert!(view.can_export());
        assert!(!view.shows_advisory());
    }

    #[test]
    fn unknown_label_uses_inline_placeholder() {
        let catalog = PropertyCatalog::bundled().unwrap();
        let session = resolved("Foo", 0.88, &catalog);
        match result_view(&session, &catalog) {
            ResultView::ResolvedHigh(details) => {
                assert_eq!(details.scientific_name, "Unknown");
                assert!(details.properties.is_empty());
            }
            other => panic!("expected full result, got {:?}", other),
        }
    }

    #[test]
    fn stage_names_are_kebab_case() {
        assert_eq!(ResultStage::ResolvedHigh.as_ref(), "resolved-high");
        assert_eq!(ResultStage::Idle.to_string(), "idle");
    }
}
