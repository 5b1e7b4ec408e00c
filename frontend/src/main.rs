mod api;
mod components;

use shared::{CloudCover, Location, PredictionResponse, RawInput, Season};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::form::render_form;
use components::header::render_header;
use components::results::render_results;
use components::utils::render_error_message;

// Yew msg components
pub enum Msg {
    // Form edits
    SetNumber(&'static str, f64),
    SetCloudCover(CloudCover),
    SetSeason(Season),
    SetLocation(Location),
    ResetForm,

    // Prediction
    Predict,
    PredictionResult(PredictionResponse),

    // UI states
    SetError(Option<String>),
}

// Main component
pub struct Model {
    input: RawInput,
    result: Option<PredictionResponse>,
    loading: bool,
    error: Option<String>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            input: RawInput::default(),
            result: None,
            loading: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetNumber(field, value) => {
                if !self.input.set_numeric(field, value) {
                    log::warn!("Ignoring edit of unknown field {}", field);
                    return false;
                }
                true
            }
            Msg::SetCloudCover(cloud_cover) => {
                self.input.cloud_cover = cloud_cover;
                true
            }
            Msg::SetSeason(season) => {
                self.input.season = season;
                true
            }
            Msg::SetLocation(location) => {
                self.input.location = location;
                true
            }
            Msg::ResetForm => {
                self.input = RawInput::default();
                self.result = None;
                self.error = None;
                true
            }

            Msg::Predict => self.handle_predict(ctx),
            Msg::PredictionResult(response) => {
                log::info!("Predicted {}", response.weather_type);
                self.result = Some(response);
                self.loading = false;
                true
            }

            Msg::SetError(error) => {
                self.error = error;
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_form(self, ctx) }
                    { render_error_message(self) }
                    { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Weather Type Prediction | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

impl Model {
    fn handle_predict(&mut self, ctx: &Context<Self>) -> bool {
        if self.loading {
            return false;
        }
        if let Err(e) = self.input.validate() {
            self.error = Some(e.to_string());
            return true;
        }

        self.loading = true;
        self.error = None;

        let input = self.input;
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::request_prediction(&input).await {
                Ok(response) => link.send_message(Msg::PredictionResult(response)),
                Err(e) => {
                    gloo_console::error!(format!("Prediction failed: {}", e));
                    link.send_message(Msg::SetError(Some(e)))
                }
            }
        });

        true
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<Model>::new().render();
}
