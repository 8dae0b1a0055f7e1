use seo_engine::content::FAQ;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("card", "faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p class="muted">{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section class="page-section">
            <h2 class="section-title">{"Frequently Asked Questions"}</h2>
            <div class="grid grid-2">
                { for FAQ.iter().map(|entry| html! {
                    <FaqItem key={entry.question} question={entry.question} answer={entry.answer} />
                }) }
            </div>
        </section>
    }
}
