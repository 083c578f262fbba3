//! Head and body shared by every page. The enclosing `<html>` element is
//! written by the renderer.
//!
//! Uses Pico CSS (classless) so pages only need semantic markup.

use dioxus::prelude::*;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

const STYLE: &str = r#"
:root { --pico-font-size: 15px; }
.status-ok { color: var(--pico-ins-color); }
.status-err { color: var(--pico-del-color); }
small { color: var(--pico-muted-color); }
"#;

/// (id, label, href)
const NAV_LINKS: [(&str, &str, &str); 1] = [("home", "Home", "/")];

#[component]
pub fn Layout(
    title: String,
    nav_active: String,
    scripts: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} - Account" }
            link { rel: "stylesheet", href: PICO_CSS }
            style { dangerous_inner_html: STYLE }
        }
        body {
            header { class: "container",
                Nav { active: nav_active }
            }
            main { class: "container", {children} }
            {scripts.map(|js| rsx! { script { dangerous_inner_html: js } })}
        }
    }
}

#[component]
fn Nav(active: String) -> Element {
    rsx! {
        nav {
            ul {
                li { strong { "Account" } }
            }
            ul {
                for (id, label, href) in NAV_LINKS {
                    li { key: "{id}",
                        if id == active {
                            a { href: href, aria_current: "page", strong { "{label}" } }
                        } else {
                            a { href: href, "{label}" }
                        }
                    }
                }
            }
        }
    }
}
