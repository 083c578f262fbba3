//! The two pages of the client: home, and the activation control.

pub mod activation;
pub mod home;

pub use activation::{ActivationNotice, ActivationPage};
pub use home::HomePage;
