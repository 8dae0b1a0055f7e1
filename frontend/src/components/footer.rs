use chrono::Datelike;
use seo_engine::content::{BRAND, QUICK_LINKS};
use yew::prelude::*;

use crate::components::booking_link::BookingLink;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-content grid grid-3">
                <div>
                    <h3>{format!("About {}", BRAND)}</h3>
                    <p>{"SEO expert helping businesses achieve sustainable growth through strategic search engine optimization."}</p>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul class="footer-links">
                        { for QUICK_LINKS.iter().map(|link| html! {
                            <li><a href="#">{*link}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Contact"}</h3>
                    <p>{"Get in touch for a personalized SEO strategy tailored to your business needs."}</p>
                    <BookingLink class="footer-booking">{"Book a Strategy Session"}</BookingLink>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, BRAND)}</p>
            </div>
        </footer>
    }
}
