//! Small shared helpers with no UI dependencies.

pub mod token;
