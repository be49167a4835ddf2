//! Workflow tests driving the controller with real collaborators.

mod common;

use anyhow::Result;
use coursegen::{CourseGenerator, FileExporter, HttpOutlineService, PageSurface};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Tests generate, page rendering, download and copy in sequence.
#[tokio::test]
async fn test_generate_download_copy_workflow() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let (base_url, server) = common::serve_once(
        200,
        r##"{"success": true, "final_outline": "# Algorithms\n- **Sorting**\n- Graphs"}"##,
    )
    .await?;
    let service = HttpOutlineService::new(&base_url, Duration::from_secs(5))?;
    let surface = Arc::new(PageSurface::new());
    let exporter = FileExporter::new(dir.path(), Vec::new());
    let mut generator = CourseGenerator::new(Box::new(service), surface.clone(), Box::new(exporter));
    generator.form_mut().title = "Algorithms".to_string();

    // Act
    generator.generate().await?;
    server.await??;
    let download = generator.download_result()?;
    generator.copy_result()?;
    let page = surface.page("Course Outline").into_string();

    // Assert
    assert!(
        page.contains("<h1>Algorithms</h1><ul><li><strong>Sorting</strong></li><li>Graphs</li></ul>"),
        "Rendered outline missing: {}",
        page
    );
    assert!(page.contains("copyResultBtn"), "Toolbar should be visible");
    assert!(page.contains("Course outline generated successfully!"));
    assert!(!surface.is_loading());

    let download = download.expect("Result should be downloadable");
    assert_eq!(std::fs::read_to_string(&download)?, "Algorithms\nSorting\nGraphs");
    assert!(download.starts_with(dir.path()));
    Ok(())
}

/// Tests a rejected request leaves the placeholder and an error alert.
#[tokio::test]
async fn test_rejected_generation_workflow() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let (base_url, server) =
        common::serve_once(200, r#"{"success": false, "error": "quota exceeded"}"#).await?;
    let service = HttpOutlineService::new(&base_url, Duration::from_secs(5))?;
    let surface = Arc::new(PageSurface::new());
    let exporter = FileExporter::new(dir.path(), Vec::new());
    let mut generator = CourseGenerator::new(Box::new(service), surface.clone(), Box::new(exporter));
    generator.form_mut().core_requirements = "Recursion".to_string();

    // Act
    let result = generator.generate().await;
    server.await??;
    let download = generator.download_result()?;

    // Assert
    assert!(result.is_err());
    assert!(download.is_none(), "Nothing to download after failure");
    let page = surface.page("Course Outline").into_string();
    assert!(page.contains("alert-danger"));
    assert!(page.contains("Error: quota exceeded"), "{}", page);
    assert!(page.contains("will appear here"));
    assert!(!page.contains("copyResultBtn"));
    Ok(())
}

/// Tests clear after a result restores the initial page.
#[tokio::test]
async fn test_clear_after_result() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let (base_url, server) =
        common::serve_once(200, r#"{"success": true, "final_outline": "text"}"#).await?;
    let service = HttpOutlineService::new(&base_url, Duration::from_secs(5))?;
    let surface = Arc::new(PageSurface::new());
    let exporter = FileExporter::new(dir.path(), Vec::new());
    let mut generator = CourseGenerator::new(Box::new(service), surface.clone(), Box::new(exporter));
    generator.form_mut().title = "Statistics".to_string();
    generator.generate().await?;
    server.await??;

    // Act
    generator.clear();

    // Assert
    let page = surface.page("Course Outline").into_string();
    assert!(page.contains("will appear here"));
    assert!(!page.contains("copyResultBtn"));
    assert!(generator.form().title.is_empty());
    assert!(generator.result().is_none());
    Ok(())
}
