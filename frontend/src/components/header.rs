use yew::prelude::*;

/// Renders the navigation bar and hero text
pub fn render_header() -> Html {
    html! {
        <>
            <div class="top-border"></div>
            <nav class="app-navbar">
                <span class="brand"><i class="fa-solid fa-leaf"></i>{" LeafMD"}</span>
            </nav>
            <header class="app-header">
                <h1>{"Medical Leaf Detection"}</h1>
                <p class="subtitle">
                    {"Identify medicinal plants with our machine learning model. \
                      Simply upload a clear image of a leaf for instant analysis."}
                </p>
            </header>
        </>
    }
}
