use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::booking_link::BookingLink;

#[derive(Properties, PartialEq)]
pub struct IntroPopupProps {
    pub on_close: Callback<()>,
}

/// Overlay asking the visitor to book a session. Shown until dismissed with
/// the close button or Escape.
#[function_component(IntroPopup)]
pub fn intro_popup(props: &IntroPopupProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);

                    if window
                        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not register Escape handler for popup");
                    }

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="popup-overlay">
            <div class="popup">
                <button class="popup-close" onclick={close} aria-label="Close">{"✕"}</button>
                <h2>{"Want to Skyrocket Your SEO?"}</h2>
                <p>
                    {"Book your FREE SEO Strategy Session with me, Julian Goldie, and let's create a custom plan for your business."}
                </p>
                <BookingLink class="button button-primary">
                    {"Book Free Strategy Session →"}
                </BookingLink>
            </div>
        </div>
    }
}
