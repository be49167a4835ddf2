//! Generated outline result panel

use maud::{Markup, PreEscaped, html};

/// Wraps rendered outline HTML in the result panel.
///
/// The outline HTML is inserted verbatim; it comes from the markdown
/// renderer, which emits only its own tags around server text.
///
/// # Arguments
///
/// * `outline_html`: Output of the markdown renderer
///
/// # Returns
///
/// Result panel markup
pub fn result_panel(outline_html: &str) -> Markup {
    html! {
        div class="content-wrapper" {
            div class="generated-content p-3 bg-light rounded" {
                (PreEscaped(outline_html))
            }
        }
    }
}

/// Renders the empty state shown before any outline is generated.
pub fn placeholder() -> Markup {
    html! {
        div class="text-center text-muted py-5" {
            i class="fas fa-graduation-cap fa-3x mb-3" {}
            p { "Your generated course outline will appear here" }
            small { "Fill in the course details and click \"Generate Course Outline\" to start" }
        }
    }
}

/// Renders the copy and download toolbar.
pub fn actions() -> Markup {
    html! {
        div id="resultActions" class="result-actions" {
            button id="copyResultBtn" type="button" class="btn btn-outline-primary btn-sm" {
                i class="fas fa-copy me-1" {}
                "Copy"
            }
            button id="downloadResultBtn" type="button" class="btn btn-outline-success btn-sm" {
                i class="fas fa-download me-1" {}
                "Download"
            }
        }
    }
}
