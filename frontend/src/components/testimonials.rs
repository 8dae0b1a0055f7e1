use seo_engine::content::{Testimonial, TESTIMONIALS};
use yew::prelude::*;

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="card testimonial" key={testimonial.name}>
            <div class="testimonial-header">
                <img src={testimonial.image} alt={testimonial.name} class="avatar" loading="lazy" />
                <div>
                    <h3>{testimonial.name}</h3>
                    <p class="byline">{testimonial.byline()}</p>
                </div>
            </div>
            <p class="muted">{testimonial.quote}</p>
            <div class="stars">
                { for (0..testimonial.stars).map(|_| html! { <span>{"★"}</span> }) }
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="page-section">
            <h2 class="section-title">{"Success Stories"}</h2>
            <div class="grid grid-3">
                { for TESTIMONIALS.iter().map(testimonial_card) }
            </div>
        </section>
    }
}
