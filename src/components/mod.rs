//! UI components: the route guard plus the presentational landing sections.

pub mod faq;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod pricing;
pub mod protected_route;
pub mod reviews;
pub mod trusted_by;
