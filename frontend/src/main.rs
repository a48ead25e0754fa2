mod api;
mod components;
mod config;

use api::HttpClassifier;
use components::{footer, handlers, header, results, upload_section};
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{ExportError, FailureResult, Generation, InferenceResult, PropertyCatalog, Session};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // File intake
    FileSelected(GlooFile),
    ClearImage,

    // Analysis
    InferenceFinished(Generation, Result<InferenceResult, FailureResult>),
    RevealResults,

    // Report export
    DownloadReport,
    ReportReady(Generation, Result<Vec<u8>, ExportError>),

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
pub struct Model {
    session: Session<GlooFile, ObjectUrl>,
    catalog: Rc<PropertyCatalog>,
    classifier: Rc<HttpClassifier>,
    is_dragging: bool,
    show_results: bool,
    reveal_timeout: Option<Timeout>,
    exporting: bool,
    export_error: Option<String>,
    report_url: Option<ObjectUrl>,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let catalog = PropertyCatalog::bundled().unwrap_or_else(|e| {
            log::error!("Failed to load leaf catalog: {}", e);
            PropertyCatalog::default()
        });
        let config = config::classifier_config();
        log::info!(
            "Classifying via {} (field \"{}\")",
            config.endpoint_url,
            config.field_name
        );

        let mut model = Self {
            session: Session::new(),
            catalog: Rc::new(catalog),
            classifier: Rc::new(HttpClassifier::new(config)),
            is_dragging: false,
            show_results: false,
            reveal_timeout: None,
            exporting: false,
            export_error: None,
            report_url: None,
            paste_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File intake
            Msg::FileSelected(file) => handlers::handle_file_selected(self, ctx, file),
            Msg::ClearImage => handlers::handle_clear_image(self),

            // Analysis
            Msg::InferenceFinished(generation, outcome) => {
                handlers::handle_inference_finished(self, ctx, generation, outcome)
            }
            Msg::RevealResults => {
                self.show_results = true;
                self.reveal_timeout = None;
                true
            }

            // Report export
            Msg::DownloadReport => handlers::handle_download_report(self, ctx),
            Msg::ReportReady(generation, result) => {
                handlers::handle_report_ready(self, generation, result)
            }

            // UI states
            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }

                <main class="main-content">
                    <section class="analysis-card">
                        { upload_section::render_upload_section(self, ctx) }
                        { results::render_results(self, ctx) }
                    </section>
                </main>

                { footer::render_footer() }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(timeout) = self.reveal_timeout.take() {
            timeout.cancel();
        }
        self.session.clear();
        self.report_url = None;
        self.paste_listener = None;
        log::debug!("Released preview and report handles");
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("LeafMD starting...");
    yew::Renderer::<Model>::new().render();
}
