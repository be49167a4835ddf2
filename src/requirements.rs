//! Course form model and request validation.

use anyhow::{Context, Result, bail, ensure};
use std::path::{Path, PathBuf};

/// Upload extensions accepted by the generation endpoint.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["txt", "pdf", "docx"];

/// Largest upload the endpoint accepts (16 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Course details collected before requesting an outline.
///
/// Every text field is optional in practice; empty fields are left out of
/// the requirements string sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseForm {
    pub title: String,
    pub audience: String,
    pub duration: String,
    pub class_hours: String,
    pub core_requirements: String,
    pub additional_requirements: String,
    pub file: Option<PathBuf>,
    pub enable_search: bool,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            audience: String::new(),
            duration: String::new(),
            class_hours: String::new(),
            core_requirements: String::new(),
            additional_requirements: String::new(),
            file: None,
            enable_search: true,
        }
    }
}

impl CourseForm {
    /// Returns labeled fields in the fixed order the server expects.
    fn labeled_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("Course Title", self.title.as_str()),
            ("Target Audience", self.audience.as_str()),
            ("Course Duration", self.duration.as_str()),
            ("Class Hours", self.class_hours.as_str()),
            ("Core Learning Requirements", self.core_requirements.as_str()),
            ("Additional Requirements", self.additional_requirements.as_str()),
        ]
    }

    /// Builds the structured requirements text.
    ///
    /// Each field is trimmed; non-empty fields become `Label: value` lines
    /// joined with `\n`. An all-empty form yields an empty string.
    pub fn requirements(&self) -> String {
        self.labeled_fields()
            .into_iter()
            .filter_map(|(label, value)| {
                let value = value.trim();
                (!value.is_empty()).then(|| format!("{label}: {value}"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Checks the form against the endpoint's accepted input.
    ///
    /// # Errors
    ///
    /// Returns error if neither a file nor any requirement is provided, or
    /// if the attached file is missing, has an unsupported extension, or
    /// exceeds [`MAX_UPLOAD_BYTES`].
    pub fn validate(&self) -> Result<()> {
        match &self.file {
            Some(path) => validate_upload(path),
            None if self.requirements().is_empty() => {
                bail!("Please upload a file or enter course requirements.")
            }
            None => Ok(()),
        }
    }

    /// Resets every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Validates an upload path by extension and size.
///
/// # Errors
///
/// Returns error if the file cannot be inspected, its extension is not in
/// [`ALLOWED_EXTENSIONS`], or it is larger than [`MAX_UPLOAD_BYTES`].
pub fn validate_upload(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    ensure!(
        ALLOWED_EXTENSIONS.contains(&extension.as_str()),
        "Unsupported file type: {} (allowed: {})",
        path.display(),
        ALLOWED_EXTENSIONS.join(", ")
    );

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Cannot read upload: {}", path.display()))?;

    ensure!(
        metadata.is_file(),
        "Upload is not a regular file: {}",
        path.display()
    );
    ensure!(
        metadata.len() <= MAX_UPLOAD_BYTES,
        "Upload exceeds 16MB limit: {} ({} bytes)",
        path.display(),
        metadata.len()
    );

    Ok(())
}
