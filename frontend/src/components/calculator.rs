use log::{info, warn};
use seo_engine::{CompetitionLevel, Estimate, EstimateError, EstimateForm, Field};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::booking_link::BookingLink;

type Outcome = Option<Result<Estimate, EstimateError>>;

#[function_component(Calculator)]
pub fn calculator() -> Html {
    let form = use_state(EstimateForm::default);
    // None until the visitor presses the button for the first time.
    let outcome = use_state(|| None as Outcome);

    let on_keywords = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_keywords(input.value());
            form.set(next);
        })
    };

    let on_pages = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_pages(input.value());
            form.set(next);
        })
    };

    let on_competition = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_competition_str(&select.value());
            form.set(next);
        })
    };

    let on_calculate = {
        let form = form.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let result = form.submit();
            match &result {
                Ok(estimate) => info!(
                    "Estimated {} for {} keywords, {} pages, {} competition",
                    estimate, form.keywords, form.pages, form.competition
                ),
                Err(err) => warn!("Rejected calculator input: {}", err),
            }
            outcome.set(Some(result));
        })
    };

    let error_field = match &*outcome {
        Some(Err(err)) => err.field(),
        _ => None,
    };
    let input_class = |field: Field| {
        classes!("calc-input", (error_field == Some(field)).then(|| "input-error"))
    };

    html! {
        <section class="calculator card">
            <div class="calculator-form">
                <h2>{"Calculate Your SEO Investment"}</h2>
                <div class="form-field">
                    <label for="keywords">{Field::Keywords.label()}</label>
                    <input
                        id="keywords"
                        type="number"
                        class={input_class(Field::Keywords)}
                        placeholder="e.g., 10"
                        value={form.keywords.clone()}
                        oninput={on_keywords}
                    />
                </div>
                <div class="form-field">
                    <label for="pages">{Field::Pages.label()}</label>
                    <input
                        id="pages"
                        type="number"
                        class={input_class(Field::Pages)}
                        placeholder="e.g., 5"
                        value={form.pages.clone()}
                        oninput={on_pages}
                    />
                </div>
                <div class="form-field">
                    <label for="competition">{"Competition Level"}</label>
                    <select id="competition" class="calc-input" onchange={on_competition}>
                        { for CompetitionLevel::ALL.iter().map(|level| html! {
                            <option value={level.as_str()} selected={form.competition == *level}>
                                {level.label()}
                            </option>
                        }) }
                    </select>
                </div>
                <button class="button button-primary button-wide" onclick={on_calculate}>
                    {"🧮 Calculate SEO Cost"}
                </button>
            </div>
            <div class="calculator-result">
                { result_panel(&*outcome) }
            </div>
        </section>
    }
}

fn result_panel(outcome: &Outcome) -> Html {
    match outcome {
        Some(Ok(estimate)) => html! {
            <div class="result">
                <h3><span class="result-icon">{"$"}</span>{"Estimated Monthly SEO Investment"}</h3>
                <p class="result-amount">{estimate.to_string()}</p>
                <p class="muted">{"Based on your specific requirements"}</p>
                <BookingLink class="text-link">{"Discuss Your Custom Plan →"}</BookingLink>
            </div>
        },
        Some(Err(err)) => html! {
            <div class="result result-error">
                <p class="error-message">{err.to_string()}</p>
                <p class="muted">{"Fix the highlighted field and calculate again."}</p>
            </div>
        },
        None => html! {
            <div class="result result-empty">
                <div class="placeholder-icon">{"🧮"}</div>
                <p>{"Enter your details to calculate your estimated SEO investment"}</p>
            </div>
        },
    }
}
