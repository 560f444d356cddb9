//! # ledgerly-web
//!
//! Leptos + WASM client for the Ledgerly marketing site and application
//! shell: a public landing page, login/register flows, and protected pages
//! behind a bearer-token session.
//!
//! The interesting machinery is the session lifecycle: the session store
//! (`state::session`), the authorizing API client (`net::api`), the silent
//! renewal performed at startup (`app`), and the route guard that decides
//! per navigation whether to render, renew, or redirect
//! (`components::protected_route`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
