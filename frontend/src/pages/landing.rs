use yew::prelude::*;

use crate::components::{
    benefits::Benefits,
    booking_link::BookingLink,
    calculator::Calculator,
    faq::FaqSection,
    footer::Footer,
    hero::Hero,
    plans::Plans,
    popup::IntroPopup,
    testimonials::Testimonials,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_popup = use_state(|| true);

    let close_popup = {
        let show_popup = show_popup.clone();
        Callback::from(move |_| {
            log::info!("Intro popup dismissed");
            show_popup.set(false);
        })
    };

    html! {
        <div class="landing-page">
            {
                if *show_popup {
                    html! { <IntroPopup on_close={close_popup} /> }
                } else {
                    html! {}
                }
            }

            <Hero />

            <main class="page-main">
                <Calculator />
                <Benefits />
                <Testimonials />
                <Plans />
                <FaqSection />

                <section class="closing-cta">
                    <h2>{"Ready to Transform Your SEO?"}</h2>
                    <p>{"Book your free strategy session now and let's create a custom SEO plan for your business."}</p>
                    <BookingLink class="button button-light">{"Book Your Free Strategy Session ⚡"}</BookingLink>
                </section>
            </main>

            <Footer />

            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }

                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #111827;
                }

                .landing-page {
                    min-height: 100vh;
                    background: #f9fafb;
                }

                .popup-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                    padding: 1rem;
                }

                .popup {
                    position: relative;
                    background: #ffffff;
                    border-radius: 8px;
                    padding: 1.5rem;
                    max-width: 28rem;
                }

                .popup h2 {
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                }

                .popup p {
                    margin: 0 0 1.5rem;
                }

                .popup-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    border: none;
                    background: none;
                    font-size: 1.25rem;
                    color: #6b7280;
                    cursor: pointer;
                }

                .popup-close:hover {
                    color: #374151;
                }

                .hero {
                    background: linear-gradient(to right, #2563eb, #1e40af);
                    color: #ffffff;
                }

                .hero-content {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .hero h1 {
                    font-size: 3rem;
                    margin: 0 0 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    max-width: 42rem;
                    margin: 0 0 2rem;
                }

                .page-main {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                }

                .page-section {
                    margin-bottom: 4rem;
                }

                .section-title {
                    font-size: 1.875rem;
                    text-align: center;
                    margin: 0 0 3rem;
                }

                .grid {
                    display: grid;
                    gap: 2rem;
                }

                .grid-2 {
                    grid-template-columns: repeat(2, 1fr);
                }

                .grid-3 {
                    grid-template-columns: repeat(3, 1fr);
                }

                .card {
                    background: #ffffff;
                    border-radius: 8px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                }

                .card h3 {
                    font-size: 1.25rem;
                    margin: 0 0 0.75rem;
                }

                .card-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .muted {
                    color: #4b5563;
                    line-height: 1.6;
                }

                .button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 8px;
                    font-size: 1rem;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .button-primary {
                    background: #2563eb;
                    color: #ffffff;
                }

                .button-primary:hover {
                    background: #1d4ed8;
                }

                .button-light {
                    background: #ffffff;
                    color: #2563eb;
                }

                .button-light:hover {
                    background: #f3f4f6;
                }

                .button-wide {
                    width: 100%;
                }

                .text-link {
                    color: #2563eb;
                    font-weight: 600;
                    text-decoration: none;
                }

                .text-link:hover {
                    color: #1d4ed8;
                }

                .calculator {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    padding: 2rem;
                    margin-bottom: 4rem;
                    border-radius: 12px;
                }

                .calculator h2 {
                    font-size: 1.5rem;
                    margin: 0 0 1.5rem;
                }

                .form-field {
                    margin-bottom: 1.5rem;
                }

                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }

                .calc-input {
                    width: 100%;
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                }

                .calc-input:focus {
                    outline: none;
                    border-color: #3b82f6;
                    box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.4);
                }

                .calc-input.input-error {
                    border-color: #dc2626;
                }

                .calculator-result {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }

                .result h3 {
                    font-size: 1.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }

                .result-icon {
                    color: #22c55e;
                }

                .result-amount {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #2563eb;
                    margin: 0 0 1rem;
                }

                .result-empty {
                    color: #6b7280;
                    font-size: 1.125rem;
                }

                .placeholder-icon {
                    font-size: 4rem;
                    opacity: 0.5;
                    margin-bottom: 1rem;
                }

                .error-message {
                    color: #dc2626;
                    font-weight: 600;
                }

                .testimonial-header {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1rem;
                }

                .testimonial-header h3 {
                    margin: 0;
                    font-size: 1rem;
                }

                .avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    margin-right: 1rem;
                }

                .byline {
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin: 0;
                }

                .stars {
                    color: #facc15;
                    margin-top: 1rem;
                    font-size: 1.25rem;
                }

                .plan-price {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #2563eb;
                    margin: 0 0 1.5rem;
                }

                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.5rem;
                }

                .plan-features li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                }

                .check {
                    color: #22c55e;
                    font-weight: 700;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    background: none;
                    border: none;
                    padding: 0;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }

                .toggle-icon {
                    color: #2563eb;
                    font-size: 1.5rem;
                }

                .faq-answer {
                    display: none;
                }

                .faq-item.open .faq-answer {
                    display: block;
                }

                .closing-cta {
                    background: #2563eb;
                    color: #ffffff;
                    padding: 3rem;
                    border-radius: 12px;
                    text-align: center;
                }

                .closing-cta h2 {
                    font-size: 1.875rem;
                    margin: 0 0 1.5rem;
                }

                .closing-cta p {
                    font-size: 1.25rem;
                    margin: 0 0 2rem;
                }

                .footer {
                    background: #111827;
                    color: #ffffff;
                    padding: 3rem 1rem;
                }

                .footer-content {
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .footer p,
                .footer-links a {
                    color: #9ca3af;
                }

                .footer-links {
                    list-style: none;
                    padding: 0;
                }

                .footer-links li {
                    margin-bottom: 0.5rem;
                }

                .footer-links a {
                    text-decoration: none;
                }

                .footer-links a:hover {
                    color: #ffffff;
                }

                .footer-booking {
                    display: inline-block;
                    margin-top: 1rem;
                    color: #60a5fa;
                    text-decoration: none;
                }

                .footer-booking:hover {
                    color: #93c5fd;
                }

                .footer-bottom {
                    max-width: 64rem;
                    margin: 2rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }

                    .grid-2,
                    .grid-3,
                    .calculator {
                        grid-template-columns: 1fr;
                    }

                    .closing-cta {
                        padding: 2rem 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
