//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::DEFAULT_TIMEOUT;
use crate::requirements::CourseForm;

/// Command line configuration for coursegen.
#[derive(Debug, Clone, Parser)]
#[command(name = "coursegen", version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render an outline markdown file to HTML
    Render(RenderArgs),
    /// Request a course outline from a generation server
    Generate(GenerateArgs),
}

/// Arguments for `render`.
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Markdown file, or `-` for stdin
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Wrap the fragment in a complete HTML page
    #[arg(long)]
    pub page: bool,
}

/// Arguments for `generate`.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Generation server base URL
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server: String,

    /// Course title
    #[arg(long)]
    pub title: Option<String>,

    /// Target audience
    #[arg(long)]
    pub audience: Option<String>,

    /// Course duration
    #[arg(long)]
    pub duration: Option<String>,

    /// Class hours
    #[arg(long)]
    pub class_hours: Option<String>,

    /// Core learning requirements
    #[arg(long)]
    pub core: Option<String>,

    /// Additional requirements
    #[arg(long)]
    pub additional: Option<String>,

    /// Course material to upload (txt, pdf, docx)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Disable web search during generation
    #[arg(long)]
    pub no_search: bool,

    /// Output directory for the outline page and downloads
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Save the outline text as a dated download
    #[arg(long)]
    pub download: bool,

    /// Copy the outline text to stdout
    #[arg(long)]
    pub copy: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input path does not exist, the server URL is not
    /// http(s), or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Render(args) => {
                if args.input.as_os_str() != "-" && !args.input.exists() {
                    bail!("Input file does not exist: {}", args.input.display());
                }
            }
            Command::Generate(args) => {
                if !(args.server.starts_with("http://") || args.server.starts_with("https://")) {
                    bail!("Server URL must start with http:// or https://: {}", args.server);
                }
                if args.timeout == 0 {
                    bail!("Timeout must be at least one second");
                }
                if let Some(file) = &args.file
                    && !file.exists()
                {
                    bail!("Upload file does not exist: {}", file.display());
                }
            }
        }

        Ok(())
    }
}

impl GenerateArgs {
    /// Builds the course form from command line fields.
    pub fn form(&self) -> CourseForm {
        CourseForm {
            title: self.title.clone().unwrap_or_default(),
            audience: self.audience.clone().unwrap_or_default(),
            duration: self.duration.clone().unwrap_or_default(),
            class_hours: self.class_hours.clone().unwrap_or_default(),
            core_requirements: self.core.clone().unwrap_or_default(),
            additional_requirements: self.additional.clone().unwrap_or_default(),
            file: self.file.clone(),
            enable_search: !self.no_search,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
