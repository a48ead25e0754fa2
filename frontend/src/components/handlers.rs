use super::super::{Model, Msg};
use super::utils::{first_file, trigger_download};
use crate::api::HttpClassifier;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{
    Completion, ExportError, FailureResult, Generation, InferenceResult, REPORT_FILENAME,
    ReportImage, ReportSnapshot, analyze, render_pdf,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Delay before the result panel fades in after a completion.
const REVEAL_DELAY_MS: u32 = 300;

pub fn handle_file_selected(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    log::info!("Selected {} ({} bytes)", file.name(), file.size());

    if let Some(timeout) = model.reveal_timeout.take() {
        timeout.cancel();
    }
    model.show_results = false;
    model.export_error = None;

    let generation = model
        .session
        .select_file(file, |file| ObjectUrl::from(file.clone()));

    if let Some(file) = model.session.file().cloned() {
        send_analysis_request(ctx, model.classifier.clone(), generation, file);
    }

    true
}

pub fn handle_clear_image(model: &mut Model) -> bool {
    if let Some(timeout) = model.reveal_timeout.take() {
        timeout.cancel();
    }
    model.session.clear();
    model.show_results = false;
    model.export_error = None;
    true
}

pub fn send_analysis_request(
    ctx: &Context<Model>,
    classifier: Rc<HttpClassifier>,
    generation: Generation,
    file: GlooFile,
) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = analyze(classifier.as_ref(), &file).await;
            link.send_message(Msg::InferenceFinished(generation, outcome));
        }
    });
}

pub fn handle_inference_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    generation: Generation,
    outcome: Result<InferenceResult, FailureResult>,
) -> bool {
    if let Ok(result) = &outcome {
        gloo_console::log!(
            "Inference response:",
            serde_json::to_string(result).unwrap_or_default()
        );
    }

    match model.session.complete(generation, outcome, &model.catalog) {
        Completion::Applied => {
            let link = ctx.link().clone();
            let timeout = Timeout::new(REVEAL_DELAY_MS, move || {
                link.send_message(Msg::RevealResults);
            });
            model.reveal_timeout = Some(timeout);
            true
        }
        Completion::Stale => {
            log::info!(
                "Ignoring response for superseded session {}",
                generation.value()
            );
            false
        }
    }
}

pub fn handle_download_report(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.exporting {
        return false;
    }

    let snapshot = match ReportSnapshot::capture(&model.session, &model.catalog) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("Report requested without an exportable result: {}", e);
            model.export_error = Some(format!("Failed to generate report: {}", e));
            return true;
        }
    };
    let Some(file) = model.session.file().cloned() else {
        model.export_error = Some("Failed to generate report: no image selected".into());
        return true;
    };

    model.exporting = true;
    model.export_error = None;
    let generation = model.session.generation();

    spawn_local({
        let link = ctx.link().clone();

        async move {
            let result = build_report(snapshot, &file).await;
            link.send_message(Msg::ReportReady(generation, result));
        }
    });

    true
}

async fn build_report(snapshot: ReportSnapshot, file: &GlooFile) -> Result<Vec<u8>, ExportError> {
    let data_url = gloo_file::futures::read_as_data_url(file)
        .await
        .map_err(|e| ExportError::ImageRead(e.to_string()))?;
    let image = ReportImage::from_data_url(&data_url)?;
    render_pdf(&snapshot.with_image(image))
}

pub fn handle_report_ready(
    model: &mut Model,
    generation: Generation,
    result: Result<Vec<u8>, ExportError>,
) -> bool {
    model.exporting = false;

    if !model.session.is_current(generation) {
        log::info!(
            "Dropping report for superseded session {}",
            generation.value()
        );
        return true;
    }

    let downloaded = result
        .map_err(|e| e.to_string())
        .and_then(|bytes| trigger_download(&bytes, REPORT_FILENAME));

    match downloaded {
        Ok(url) => {
            log::info!("Report saved as {}", REPORT_FILENAME);
            // Replacing the previous URL revokes it.
            model.report_url = Some(url);
        }
        Err(e) => {
            log::error!("Report export failed: {}", e);
            model.export_error = Some(format!("Failed to generate report: {}", e));
        }
    }

    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    event.stop_propagation();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list))
    {
        ctx.link().send_message(Msg::FileSelected(file));
    }

    true
}

pub fn handle_paste(ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file) = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list))
    {
        event.prevent_default();
        ctx.link().send_message(Msg::FileSelected(file));
    }
    false
}
