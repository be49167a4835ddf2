//! Course outline generation client with a line-oriented markdown renderer.

pub mod client;
pub mod components;
mod config;
pub mod controller;
pub mod export;
mod markdown;
pub mod progress;
pub mod requirements;
pub mod surface;

pub use client::{GenerateError, GenerateResponse, HttpOutlineService, OutlineService};
pub use config::{Command, Config, GenerateArgs, RenderArgs};
pub use controller::{CourseGenerator, GeneratedOutline, Surface};
pub use export::{Exporter, FileExporter, download_file_name, plain_text};
pub use markdown::{Block, MarkdownRenderer, blocks};
pub use progress::{ProgressHandle, ProgressRotator, ProgressSink};
pub use requirements::CourseForm;
pub use surface::PageSurface;
