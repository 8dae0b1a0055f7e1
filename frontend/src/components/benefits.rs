use seo_engine::content::BENEFITS;
use yew::prelude::*;

#[function_component(Benefits)]
pub fn benefits() -> Html {
    html! {
        <section class="page-section">
            <h2 class="section-title">{"Why Invest in SEO?"}</h2>
            <div class="grid grid-3">
                { for BENEFITS.iter().map(|benefit| html! {
                    <div class="card" key={benefit.title}>
                        <div class="card-icon">{benefit.icon}</div>
                        <h3>{benefit.title}</h3>
                        <p class="muted">{benefit.body}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
