use seo_engine::content::PLANS;
use yew::prelude::*;

use crate::components::booking_link::BookingLink;

#[function_component(Plans)]
pub fn plans() -> Html {
    html! {
        <section class="page-section">
            <h2 class="section-title">{"SEO Investment Plans"}</h2>
            <div class="grid grid-3">
                { for PLANS.iter().map(|plan| html! {
                    <div class="card plan" key={plan.name}>
                        <h3>{plan.name}</h3>
                        <p class="plan-price">{plan.price}</p>
                        <ul class="plan-features">
                            { for plan.features.iter().map(|feature| html! {
                                <li><span class="check">{"✓"}</span>{*feature}</li>
                            }) }
                        </ul>
                        <BookingLink class="button button-primary button-wide">{"Get Started"}</BookingLink>
                    </div>
                }) }
            </div>
        </section>
    }
}
