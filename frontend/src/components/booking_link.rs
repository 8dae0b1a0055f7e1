use yew::prelude::*;

use crate::config::BOOKING_URL;

#[derive(Properties, PartialEq)]
pub struct BookingLinkProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Outbound link to the booking page, always in a new tab.
#[function_component(BookingLink)]
pub fn booking_link(props: &BookingLinkProps) -> Html {
    html! {
        <a
            href={BOOKING_URL}
            target="_blank"
            rel="noopener noreferrer"
            class={props.class.clone()}
        >
            { for props.children.iter() }
        </a>
    }
}
