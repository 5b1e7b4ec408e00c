use super::super::{Model, Msg};
use super::utils::debounce;
use shared::{bounds, NumericBounds};
use std::fmt::Display;
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub fn render_form(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let predict = debounce(300, {
        let link = link.clone();
        move || link.send_message(Msg::Predict)
    });

    html! {
        <section class="input-section">
            <h2>{"Input Features"}</h2>
            <div class="form-grid">
                { render_number(model, ctx, bounds::TEMPERATURE) }
                { render_number(model, ctx, bounds::HUMIDITY) }
                { render_number(model, ctx, bounds::WIND_SPEED) }
                { render_number(model, ctx, bounds::PRECIPITATION) }
                { render_select("Cloud Cover", model.input.cloud_cover, link.callback(Msg::SetCloudCover)) }
                { render_number(model, ctx, bounds::ATMOSPHERIC_PRESSURE) }
                { render_number(model, ctx, bounds::UV_INDEX) }
                { render_select("Season", model.input.season, link.callback(Msg::SetSeason)) }
                { render_number(model, ctx, bounds::VISIBILITY) }
                { render_select("Location", model.input.location, link.callback(Msg::SetLocation)) }
            </div>
            <div class="form-actions">
                <button class="predict-btn" disabled={model.loading} onclick={predict}>
                    { if model.loading { "Predicting..." } else { "Predict" } }
                </button>
                <button class="reset-btn" onclick={link.callback(|_| Msg::ResetForm)}>
                    {"Reset"}
                </button>
            </div>
        </section>
    }
}

fn render_number(model: &Model, ctx: &Context<Model>, field: NumericBounds) -> Html {
    let current = model.input.numeric(field.field).unwrap_or(field.default);
    let name = field.field;
    let onchange = ctx.link().callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetNumber(name, input.value_as_number())
    });

    html! {
        <label class="form-field">
            <span>{ field.label }</span>
            <input
                type="number"
                name={name}
                min={field.min.to_string()}
                max={field.max.to_string()}
                step={field.step.to_string()}
                value={current.to_string()}
                {onchange}
            />
        </label>
    }
}

fn render_select<E>(label: &'static str, current: E, on_select: Callback<E>) -> Html
where
    E: IntoEnumIterator + FromStr + Display + PartialEq + Copy + 'static,
{
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        match E::from_str(&select.value()) {
            Ok(value) => on_select.emit(value),
            Err(_) => log::warn!("Unknown {} option: {}", label, select.value()),
        }
    });

    html! {
        <label class="form-field">
            <span>{ label }</span>
            <select {onchange}>
                { for E::iter().map(|option| {
                    let value = option.to_string();
                    html! {
                        <option value={value.clone()} selected={option == current}>{ value }</option>
                    }
                })}
            </select>
        </label>
    }
}
