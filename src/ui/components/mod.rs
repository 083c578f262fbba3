//! Shared building blocks for the page components.

mod layout;

pub use layout::Layout;
