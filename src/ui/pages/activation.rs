//! Account activation page component.
//!
//! Shows a single control that confirms the token from the page URL. The
//! form posts back to the page's own address, so the token never has to be
//! echoed into the markup.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Disables the control once pressed so a second press can't be sent
/// while the first is still waiting for an answer.
const ACTIVATION_SCRIPT: &str = r#"
document.getElementById('activate-form').addEventListener('submit', () => {
    const btn = document.getElementById('activate-button');
    btn.disabled = true;
    btn.setAttribute('aria-busy', 'true');
});
"#;

/// Feedback shown after the control was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationNotice {
    /// The API answered with something other than `204`.
    Rejected,
    /// The API could not be reached at all.
    Unreachable,
    /// A request for this token is still waiting for its answer.
    InProgress,
}

impl ActivationNotice {
    pub fn message(self) -> &'static str {
        match self {
            ActivationNotice::Rejected => "Failed to confirm token",
            ActivationNotice::Unreachable => "Could not reach the activation service",
            ActivationNotice::InProgress => "Activation already in progress",
        }
    }

    /// Failures interrupt the user with a dialog; progress notices don't.
    pub fn is_blocking(self) -> bool {
        !matches!(self, ActivationNotice::InProgress)
    }
}

fn page_script(notice: Option<ActivationNotice>) -> String {
    match notice {
        Some(notice) if notice.is_blocking() => {
            format!("{ACTIVATION_SCRIPT}\nalert('{}');\n", notice.message())
        }
        _ => ACTIVATION_SCRIPT.to_string(),
    }
}

#[component]
pub fn ActivationPage(notice: Option<ActivationNotice>) -> Element {
    let scripts = page_script(notice);

    rsx! {
        Layout {
            title: "Activate".to_string(),
            nav_active: "activate".to_string(),
            scripts: Some(scripts),

            h1 { "Activate" }

            {notice.map(|notice| {
                let message = notice.message();
                let class = if notice.is_blocking() { "status-err" } else { "" };
                rsx! {
                    article { id: "activation-notice", role: "alert", class: class, "{message}" }
                }
            })}

            form { id: "activate-form", method: "post",
                button { id: "activate-button", r#type: "submit", "Click to activate" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_raise_a_dialog() {
        for notice in [ActivationNotice::Rejected, ActivationNotice::Unreachable] {
            let script = page_script(Some(notice));
            assert!(script.contains(&format!("alert('{}')", notice.message())));
        }
    }

    #[test]
    fn progress_and_idle_pages_do_not_alert() {
        assert!(!page_script(Some(ActivationNotice::InProgress)).contains("alert("));
        assert!(!page_script(None).contains("alert("));
    }

    #[test]
    fn network_failures_read_differently_from_rejections() {
        assert_ne!(
            ActivationNotice::Rejected.message(),
            ActivationNotice::Unreachable.message()
        );
    }
}
