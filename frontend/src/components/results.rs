use super::super::{Model, Msg};
use super::utils::{debounce, render_export_error};
use shared::view::{
    ADVISORY_TEXT, ANALYZING_TEXT, IDLE_PROMPT, LOW_CONFIDENCE_HEADLINE, LOW_CONFIDENCE_HINT,
    NO_PROPERTIES_TEXT,
};
use shared::{FormattedConfidence, ResolvedDetails, ResultView, result_view};
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let view = result_view(&model.session, &model.catalog);

    html! {
        <div class={classes!("results-container", view.stage().to_string())}>
            <h2 class="results-title">{"Analysis Results"}</h2>
            {
                match &view {
                    ResultView::Idle => html! {
                        <div class="results-idle">
                            <i class="fa-solid fa-leaf fa-3x"></i>
                            <p>{ IDLE_PROMPT }</p>
                        </div>
                    },
                    ResultView::Analyzing => html! {
                        <div class="results-loading">
                            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                            <p>{ ANALYZING_TEXT }</p>
                            <div class="progress-track"><div class="progress-bar"></div></div>
                        </div>
                    },
                    ResultView::Failed { message } => html! {
                        <div class="error-message">
                            <i class="fa-solid fa-circle-exclamation"></i>
                            <p>{ *message }</p>
                        </div>
                    },
                    ResultView::ResolvedLow { advisory, .. } => html! {
                        <div class={classes!("result-body", model.show_results.then_some("visible"))}>
                            <div class="result-card">
                                <p class="not-medicinal">{ LOW_CONFIDENCE_HEADLINE }</p>
                                <p class="hint">{ LOW_CONFIDENCE_HINT }</p>
                            </div>
                            { render_advisory(*advisory) }
                        </div>
                    },
                    ResultView::ResolvedHigh(details) => html! {
                        <div class={classes!("result-body", model.show_results.then_some("visible"))}>
                            { render_details(details) }
                            { render_advisory(details.advisory) }
                            { render_download_button(model, ctx) }
                            { render_export_error(model) }
                        </div>
                    },
                }
            }
        </div>
    }
}

fn render_details(details: &ResolvedDetails<'_>) -> Html {
    html! {
        <>
            <div class="result-card">
                <p class="card-label">{"Leaf Category:"}</p>
                <p class="leaf-category">{ details.class_label }</p>
                <p class="scientific-name">
                    {"Scientific Name: "}<span>{ details.scientific_name }</span>
                </p>
            </div>
            { render_confidence(details.confidence) }
            <div class="result-card">
                <p class="card-label">{"Medicinal Properties:"}</p>
                <div class="property-chips">
                    {
                        if details.properties.is_empty() {
                            html! { <p class="no-properties">{ NO_PROPERTIES_TEXT }</p> }
                        } else {
                            details.properties.iter().map(|property| html! {
                                <span class="property-chip">{ property }</span>
                            }).collect::<Html>()
                        }
                    }
                </div>
            </div>
        </>
    }
}

fn render_confidence(confidence: &FormattedConfidence) -> Html {
    html! {
        <div class="result-card">
            <p class="card-label">{"Confidence:"}</p>
            <div class="confidence-meter">
                <div class="meter-value">{ format!("{}%", confidence) }</div>
                <div class="meter">
                    <div class="meter-fill" style={format!("width: {}%", confidence.bar_width())}></div>
                </div>
            </div>
        </div>
    }
}

fn render_advisory(advisory: bool) -> Html {
    if !advisory {
        return html! {};
    }
    html! {
        <div class="advisory-banner">
            <i class="fa-solid fa-circle-exclamation"></i>
            <p>{ ADVISORY_TEXT }</p>
        </div>
    }
}

fn render_download_button(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <button
            class="analyze-btn download-btn"
            disabled={model.exporting}
            onclick={debounce(300, move || link.send_message(Msg::DownloadReport))}
        >
            {
                if model.exporting {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Preparing Report..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-download"></i>{" Download Report"}</> }
                }
            }
        </button>
    }
}
