//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session store is the single source of truth for the current
//! credential. It is provided as an `RwSignal` context from the root
//! component and passed to consumers explicitly rather than read through
//! hidden globals.

pub mod session;
