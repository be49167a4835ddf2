//! Dismissible status alerts

use maud::{Markup, html};

/// Alert severity, mapped to styling and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    fn class_suffix(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            AlertKind::Success => "fas fa-check-circle me-2",
            AlertKind::Danger => "fas fa-exclamation-triangle me-2",
        }
    }
}

/// User facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Success,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Danger,
        }
    }
}

/// Renders a dismissible alert with an icon matching its kind.
///
/// The message is escaped; alerts carry server and I/O error text.
pub fn alert(alert: &Alert) -> Markup {
    let class = format!(
        "alert alert-{} alert-dismissible fade show",
        alert.kind.class_suffix()
    );
    html! {
        div class=(class) role="alert" {
            i class=(alert.kind.icon()) {}
            (alert.message)
            button type="button" class="btn-close" data-bs-dismiss="alert" {}
        }
    }
}
