//! Route modules. Each exposes a `router()` merged in [`crate::app`].

pub mod feeds;
pub mod tickets;
