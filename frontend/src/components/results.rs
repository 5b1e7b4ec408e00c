use super::super::Model;
use super::utils::format_index;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(result) = &model.result else {
        return html! {};
    };
    let label = result.weather_type.label();

    html! {
        <div class={classes!("results-container", label.to_lowercase())}>
            <div class="success-message">
                <p>{ &result.message }</p>
            </div>
            <img
                class="weather-image"
                src={result.image_url.clone()}
                alt={format!("{} weather", label)}
            />
            <div class="detailed-results">
                <h3>{"Derived Features"}</h3>
                <dl>
                    <dt>{"Heat index"}</dt>
                    <dd>{ format_index(result.derived.heat_index) }</dd>
                    <dt>{"Wind chill"}</dt>
                    <dd>{ format_index(result.derived.wind_chill) }</dd>
                    <dt>{"UV index band"}</dt>
                    <dd>{ result.derived.uv_index_bin.to_string() }</dd>
                </dl>
                <p class="request-id">{ format!("Request {}", result.request_id) }</p>
            </div>
        </div>
    }
}
