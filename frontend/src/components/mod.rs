pub mod benefits;
pub mod booking_link;
pub mod calculator;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod plans;
pub mod popup;
pub mod testimonials;
