use yew::prelude::*;

use crate::components::booking_link::BookingLink;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-content">
                <h1>{"SEO Cost Calculator"}</h1>
                <p class="hero-subtitle">
                    {"Discover your perfect SEO investment with our advanced calculator. Get instant, personalized estimates based on your specific needs."}
                </p>
                <BookingLink class="button button-light">{"Free Strategy Session →"}</BookingLink>
            </div>
        </header>
    }
}
