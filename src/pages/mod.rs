//! Page components, one per route.

pub mod customers;
pub mod features;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod register;
pub mod reports;
