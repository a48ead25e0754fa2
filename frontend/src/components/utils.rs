use super::super::Model;
use gloo_file::{Blob, File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{FileList, HtmlElement};
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Only the first file of a multi-file drop or paste is analyzed.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

pub fn open_file_picker() {
    if let Some(input) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("file-input"))
    {
        if let Ok(html_input) = input.dyn_into::<HtmlElement>() {
            html_input.click();
        }
    }
}

/// Saves `bytes` as a PDF download. The returned URL must be kept alive until
/// the browser has picked it up.
pub fn trigger_download(bytes: &[u8], filename: &str) -> Result<ObjectUrl, String> {
    let url = ObjectUrl::from(Blob::new_with_options(bytes, Some("application/pdf")));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document available")?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?;
    anchor
        .set_attribute("href", &url)
        .map_err(|e| format!("{:?}", e))?;
    anchor
        .set_attribute("download", filename)
        .map_err(|e| format!("{:?}", e))?;
    anchor
        .dyn_into::<HtmlElement>()
        .map_err(|_| "download link is not an HTML element".to_string())?
        .click();

    Ok(url)
}

pub fn render_export_error(model: &Model) -> Html {
    if let Some(error_msg) = &model.export_error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
