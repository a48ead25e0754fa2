use super::super::Model;
use yew::prelude::*;

pub fn render_preview_area(model: &Model) -> Html {
    match model.session.preview() {
        Some(url) => html! {
            <div class="preview-frame">
                <img id="actual-image-preview" src={url.to_string()} alt="Leaf preview" />
                <div class="preview-overlay">
                    <p>{"Click to replace image"}</p>
                </div>
            </div>
        },
        None => html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-upload"></i>
                <p>{"Drag and drop a leaf image or click to browse"}</p>
            </div>
        },
    }
}
