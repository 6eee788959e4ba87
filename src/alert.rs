//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the page's alert container, either as the target
//! of a failed htmx request or as an out-of-band swap alongside a normal
//! response.

use maud::{Markup, html};

use crate::html::ALERT_CONTAINER_ID;

/// Alert message types for styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertType {
    Success,
    Error,
}

/// A message with optional details shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert<'a> {
    pub alert_type: AlertType,
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new success alert
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Success,
            message,
            details,
        }
    }

    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Error,
            message,
            details,
        }
    }

    pub fn into_html(self) -> Markup {
        let style = match self.alert_type {
            AlertType::Success => {
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400 border border-green-300"
            }
            AlertType::Error => {
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 border border-red-300"
            }
        };

        html!(
            div class=(style) role="alert" data-alert-type=(self.alert_type.name())
            {
                div class="flex justify-between items-start gap-4"
                {
                    div
                    {
                        p class="font-medium" { (self.message) }

                        @if !self.details.is_empty() {
                            p class="mt-1" { (self.details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="font-bold"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        )
    }

    /// Render the alert so that htmx swaps it into the alert container,
    /// whatever the target of the request was.
    pub fn into_oob_html(self) -> Markup {
        html!(
            div
                id=(ALERT_CONTAINER_ID)
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                (self.into_html())
            }
        )
    }
}

impl AlertType {
    fn name(self) -> &'static str {
        match self {
            AlertType::Success => "success",
            AlertType::Error => "error",
        }
    }
}
