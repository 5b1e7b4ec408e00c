use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Weather Type Prediction App"}</h1>
            <p class="subtitle">{"Enter the current readings and press Predict"}</p>
        </header>
    }
}
