//! Blocking browser dialogs.

/// Operator's answer to a destructive-action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Shows `window.confirm`. A missing window or a dismissed dialog counts as
/// declined.
pub fn confirm(message: &str) -> Confirmation {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
        .into()
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.alert_with_message(message) {
            log::warn!("Failed to show alert: {:?}", e);
        }
    }
}
