//! Course outline generation controller.
//!
//! [`CourseGenerator`] owns the course form and the latest result, and
//! drives its injected collaborators: an [`OutlineService`] that produces
//! outline text, a [`Surface`] that displays state, and an [`Exporter`]
//! behind the copy and download toolbar.

use anyhow::{Result, anyhow};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::client::OutlineService;
use crate::components::alert::Alert;
use crate::components::result::{placeholder, result_panel};
use crate::export::{Exporter, plain_text};
use crate::markdown::MarkdownRenderer;
use crate::progress::{ProgressRotator, ProgressSink};
use crate::requirements::CourseForm;

/// Alert shown after a successful generation.
pub const SUCCESS_MESSAGE: &str = "Course outline generated successfully!";

/// Alert shown when copying fails.
pub const COPY_FAILED_MESSAGE: &str =
    "Copy failed. Please select the text and press Cmd/Ctrl+C.";

/// Display surface for generation state.
///
/// Progress text arrives through the [`ProgressSink`] supertrait while a
/// request is in flight.
pub trait Surface: ProgressSink {
    /// Shows or hides the loading indicator and disables generation.
    fn set_loading(&self, loading: bool);

    /// Replaces the result area with the given markup.
    fn set_result(&self, html: &str);

    /// Shows or hides the copy and download toolbar.
    fn set_actions_visible(&self, visible: bool);

    /// Displays a dismissible alert.
    fn show_alert(&self, alert: &Alert);
}

/// Generated outline kept for the toolbar actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutline {
    /// Outline text as returned by the service.
    pub source: String,
    /// Rendered outline HTML, without the result panel wrapper.
    pub html: String,
}

impl GeneratedOutline {
    /// Readable text of the rendered outline.
    pub fn plain_text(&self) -> String {
        plain_text(&self.html)
    }
}

/// Controller for the course outline form.
pub struct CourseGenerator<S: Surface> {
    form: CourseForm,
    result: Option<GeneratedOutline>,
    service: Box<dyn OutlineService>,
    surface: Arc<S>,
    exporter: Box<dyn Exporter>,
    renderer: MarkdownRenderer,
    rotator: ProgressRotator,
}

impl<S: Surface> CourseGenerator<S> {
    /// Creates controller with its collaborators and the default progress
    /// rotation.
    pub fn new(
        service: Box<dyn OutlineService>,
        surface: Arc<S>,
        exporter: Box<dyn Exporter>,
    ) -> Self {
        Self {
            form: CourseForm::default(),
            result: None,
            service,
            surface,
            exporter,
            renderer: MarkdownRenderer::new(),
            rotator: ProgressRotator::default(),
        }
    }

    /// Replaces the progress rotation used while generating.
    pub fn with_rotator(mut self, rotator: ProgressRotator) -> Self {
        self.rotator = rotator;
        self
    }

    pub fn form(&self) -> &CourseForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CourseForm {
        &mut self.form
    }

    /// Latest generated outline, if any.
    pub fn result(&self) -> Option<&GeneratedOutline> {
        self.result.as_ref()
    }

    /// Requests an outline for the current form and displays the result.
    ///
    /// The loading state and progress rotation are active only while the
    /// service call runs and are cleared whether it succeeds or fails. On
    /// success the rendered outline replaces the result area and the
    /// toolbar is shown; on failure a danger alert is shown and the previous
    /// result is kept.
    ///
    /// # Errors
    ///
    /// Returns the failure that was reported to the user.
    pub async fn generate(&mut self) -> Result<()> {
        if let Err(e) = self.form.validate() {
            warn!(error = %e, "course form rejected");
            self.surface.show_alert(&Alert::danger(format!("Error: {e}")));
            return Err(e);
        }

        self.surface.set_loading(true);
        let progress = self.rotator.start(self.surface.clone());

        let outcome = self.service.generate(&self.form).await;

        progress.stop().await;
        self.surface.set_loading(false);

        match outcome {
            Ok(source) => {
                let html = self.renderer.render(&source);
                self.surface.set_result(&result_panel(&html).into_string());
                self.surface.set_actions_visible(true);
                self.surface.show_alert(&Alert::success(SUCCESS_MESSAGE));
                info!(bytes = source.len(), "course outline generated");
                self.result = Some(GeneratedOutline { source, html });
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "course outline generation failed");
                self.surface.show_alert(&Alert::danger(format!("Error: {e}")));
                Err(anyhow!(e))
            }
        }
    }

    /// Clears the form, shows the placeholder and hides the toolbar.
    pub fn clear(&mut self) {
        self.form.clear();
        self.result = None;
        self.surface.set_result(&placeholder().into_string());
        self.surface.set_actions_visible(false);
        info!("form cleared");
    }

    /// Copies the plain text of the current result.
    ///
    /// Does nothing when there is no result or its text is empty.
    ///
    /// # Errors
    ///
    /// Returns error if the exporter fails to copy; the user sees a danger
    /// alert asking them to copy manually.
    pub fn copy_result(&self) -> Result<()> {
        let Some(text) = self.result_text() else {
            return Ok(());
        };

        self.exporter.copy(&text).inspect_err(|e| {
            error!(error = %e, "copy failed");
            self.surface.show_alert(&Alert::danger(COPY_FAILED_MESSAGE));
        })
    }

    /// Saves the plain text of the current result as a download.
    ///
    /// # Returns
    ///
    /// Path of the written file, or `None` when there is nothing to save
    ///
    /// # Errors
    ///
    /// Returns error if the exporter fails to write the file.
    pub fn download_result(&self) -> Result<Option<PathBuf>> {
        let Some(text) = self.result_text() else {
            return Ok(None);
        };

        match self.exporter.download(&text) {
            Ok(path) => Ok(Some(path)),
            Err(e) => {
                error!(error = %e, "download failed");
                self.surface.show_alert(&Alert::danger(format!("Error: {e}")));
                Err(e)
            }
        }
    }

    fn result_text(&self) -> Option<String> {
        self.result
            .as_ref()
            .map(GeneratedOutline::plain_text)
            .filter(|text| !text.is_empty())
    }
}
