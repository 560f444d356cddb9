//! Backend endpoint paths.
//!
//! The backend is served from the same origin (proxied in development), so
//! paths are relative. The refresh and logout endpoints authenticate via an
//! HTTP-only cookie rather than a request body.

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REGISTER_PATH: &str = "/api/auth/register/";
pub const REFRESH_PATH: &str = "/api/auth/token/refresh/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";
pub const NEWSLETTER_PATH: &str = "/api/auth/newsletter_subscribe/";
