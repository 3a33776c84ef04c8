use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{DirectorySections, EmbeddedSections, QuizCatalogService, SectionSource};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidContentDir { raw: String },
    UnknownSection { slug: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidContentDir { raw } => write!(f, "invalid --content value: {raw}"),
            ArgsError::UnknownSection { slug } => write!(f, "unknown --section value: {slug}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Arc<QuizCatalogService>,
    initial_section: Option<String>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<QuizCatalogService> {
        Arc::clone(&self.catalog)
    }

    fn initial_section(&self) -> Option<String> {
        self.initial_section.clone()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    content_dir: Option<PathBuf>,
    section: Option<String>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--content <dir>] [--section <slug>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --content <dir>   load question banks (*.json) from a directory");
    eprintln!("                    instead of the built-in HTML/CSS/JavaScript/React banks");
    eprintln!("  --section <slug>  open this quiz on launch");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_CONTENT_DIR, QUIZ_SECTION, RUST_LOG");
}

impl Args {
    /// Flags win over environment values.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            content_dir: env("QUIZ_CONTENT_DIR")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            section: env("QUIZ_SECTION").filter(|value| !value.trim().is_empty()),
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content" => {
                    let value = require_value(args, "--content")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidContentDir { raw: value });
                    }
                    parsed.content_dir = Some(PathBuf::from(value));
                }
                "--section" => {
                    parsed.section = Some(require_value(args, "--section")?);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn load_catalog(
    content_dir: Option<&PathBuf>,
) -> Result<QuizCatalogService, Box<dyn std::error::Error>> {
    let source: Box<dyn SectionSource> = match content_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading question banks from directory");
            Box::new(DirectorySections::new(dir))
        }
        None => Box::new(EmbeddedSections),
    };
    Ok(QuizCatalogService::from_source(source.as_ref())?)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let catalog = load_catalog(args.content_dir.as_ref())?;
    if let Some(slug) = args.section.as_deref() {
        if catalog.section(slug).is_err() {
            return Err(ArgsError::UnknownSection {
                slug: slug.to_string(),
            }
            .into());
        }
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog: Arc::new(catalog),
        initial_section: args.section,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Lesson Quizzes")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
