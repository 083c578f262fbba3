//! Landing page. Successful activations end up here.

use dioxus::prelude::*;

use crate::ui::components::Layout;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            h1 { "Home" }
            p { "Welcome. If you just activated your account, you can now sign in." }
        }
    }
}
