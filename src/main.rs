use anyhow::{Context, Result};
use coursegen::{
    Command, Config, CourseGenerator, FileExporter, GenerateArgs, HttpOutlineService,
    MarkdownRenderer, PageSurface, RenderArgs,
};
use std::fs;
use std::io::Read;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Title of pages written by the CLI.
const PAGE_TITLE: &str = "Course Outline";

/// File name of the page written by `generate`.
const OUTLINE_PAGE: &str = "outline.html";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders a markdown file or stdin to an HTML fragment or page.
fn run_render(args: &RenderArgs) -> Result<()> {
    let renderer = MarkdownRenderer::new();

    let fragment = if args.input.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read markdown from stdin")?;
        renderer.render(&content)
    } else {
        renderer.render_file(&args.input)?
    };

    let html = if args.page {
        let body = coursegen::components::result::result_panel(&fragment);
        coursegen::components::layout::page_wrapper(PAGE_TITLE, body).into_string()
    } else {
        fragment
    };

    match &args.output {
        Some(path) => {
            fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "rendered outline");
        }
        None => println!("{html}"),
    }

    Ok(())
}

/// Requests an outline and writes the resulting page and exports.
async fn run_generate(args: &GenerateArgs) -> Result<()> {
    fs::create_dir_all(&args.output).context("Failed to create output directory")?;

    let service = HttpOutlineService::new(&args.server, args.timeout())
        .context("Failed to create HTTP client")?;
    let surface = Arc::new(PageSurface::new());
    let exporter = FileExporter::new(&args.output, std::io::stdout());

    let mut generator =
        CourseGenerator::new(Box::new(service), surface.clone(), Box::new(exporter));
    *generator.form_mut() = args.form();

    let outcome = generator.generate().await;

    let page_path = args.output.join(OUTLINE_PAGE);
    fs::write(&page_path, surface.page(PAGE_TITLE).into_string())
        .with_context(|| format!("Failed to write {}", page_path.display()))?;
    info!(path = %page_path.display(), "wrote outline page");

    outcome?;

    if args.download
        && let Some(path) = generator.download_result()?
    {
        info!(path = %path.display(), "saved outline text");
    }
    if args.copy {
        generator.copy_result()?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Render(args) => run_render(args),
        Command::Generate(args) => run_generate(args).await,
    }
}
