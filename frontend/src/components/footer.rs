use yew::prelude::*;

pub fn render_footer() -> Html {
    html! {
        <footer class="app-footer">
            <p>{"LeafMD | Medicinal Leaf Identification"}</p>
        </footer>
    }
}
