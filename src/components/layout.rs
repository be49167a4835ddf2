//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Stylesheet used by the outline page markup.
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";

/// Icon font referenced by alerts and the placeholder.
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, head with charset, viewport and stylesheets, and the
/// container the alerts and result panel live in.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Course Generator" }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                link rel="stylesheet" href=(FONT_AWESOME_CSS);
            }
            body {
                div class="container py-4" {
                    (body)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_document() {
        // Arrange & Act
        let html = page_wrapper("Outline", html! { p { "body" } }).into_string();

        // Assert
        assert!(html.starts_with("<!DOCTYPE html>"), "{}", html);
        assert!(html.contains("<title>Outline - Course Generator</title>"));
        assert!(html.contains("<p>body</p>"));
    }
}
