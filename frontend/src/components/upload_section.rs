use super::super::{Model, Msg};
use super::preview_area::render_preview_area;
use super::utils::{debounce, first_file, open_file_picker};
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let has_file = model.session.file().is_some();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        // Allows picking the same file again.
        input.set_value("");

        file.map(Msg::FileSelected)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!(
                    "upload-area",
                    model.is_dragging.then_some("drag-over"),
                    has_file.then_some("has-preview")
                )}
                ondragenter={handle_drag_over.clone()}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, open_file_picker)}
            >
                { render_preview_area(model) }
            </div>

            <div class="button-container">
                <button
                    id="upload-button"
                    class="analyze-btn"
                    onclick={debounce(300, open_file_picker)}
                >
                    <i class="fa-solid fa-upload"></i>{" Upload Image"}
                </button>
                <button
                    id="clear-btn"
                    class="analyze-btn clear-btn"
                    disabled={!has_file}
                    onclick={link.callback(|_| Msg::ClearImage)}
                >
                    <i class={classes!(
                        "fa-solid",
                        "fa-rotate-right",
                        model.session.is_analyzing().then_some("fa-spin")
                    )}></i>
                    {" Clear"}
                </button>
            </div>
        </div>
    }
}
