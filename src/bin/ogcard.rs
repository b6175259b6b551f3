use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use ogcard::{
    CardDocument, EmojiOptions, FontCache, Layout, ParsedRequest, RenderOptions, Variant, render,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ogcard", version, about = "ogcard - HTML templates for Open Graph images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a card document or bare request to HTML
    Render {
        /// Input JSON file (card document with meta + request, or a bare request)
        input: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the layout variant
        #[arg(short, long)]
        layout: Option<Variant>,

        /// Directory holding the font assets
        #[arg(long, default_value = "assets/fonts")]
        fonts: PathBuf,

        /// Override the emoji image base URL
        #[arg(long)]
        emoji_base: Option<String>,
    },
    /// List the built-in layout variants
    Layouts,
    /// Print version info
    Version,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ogcard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            layout,
            fonts,
            emoji_base,
        } => {
            // Fonts are a startup precondition: nothing renders without them.
            let fonts = match FontCache::load_all(&fonts) {
                Ok(f) => f,
                Err(e) => {
                    tracing::error!("{}", e);
                    process::exit(1);
                }
            };
            tracing::info!(faces = fonts.len(), "fonts loaded");

            let mut emoji = EmojiOptions::default();
            if let Some(base) = emoji_base {
                emoji.base = base;
            }

            let (request, mut options) = match read_input(&input, &emoji) {
                Ok(parsed) => parsed,
                Err(message) => {
                    tracing::error!("{}", message);
                    process::exit(1);
                }
            };

            if let Some(variant) = layout {
                options.layout = variant;
            }

            let html = render(&request, &options, &fonts);

            match output {
                Some(path) => {
                    if let Err(e) = fs::write(&path, &html) {
                        tracing::error!("Error writing {}: {}", path.display(), e);
                        process::exit(1);
                    }
                    tracing::info!(
                        layout = %options.layout,
                        bytes = html.len(),
                        "wrote {}",
                        path.display()
                    );
                }
                None => {
                    println!("{}", html);
                }
            }
        }
        Commands::Layouts => {
            for layout in Layout::all() {
                println!("{:<10} {}", layout.name, layout.description);
            }
        }
        Commands::Version => {
            println!("ogcard {}", env!("CARGO_PKG_VERSION"));
        }
    }
}

/// Read a card document, or a bare request (no `request` key) with default options.
fn read_input(
    input: &Path,
    emoji: &EmojiOptions,
) -> Result<(ParsedRequest, RenderOptions), String> {
    let json = fs::read_to_string(input)
        .map_err(|e| format!("Error reading {}: {}", input.display(), e))?;
    let invalid = |e: &dyn std::fmt::Display| format!("Invalid input {}: {}", input.display(), e);

    let value: serde_json::Value = serde_json::from_str(&json).map_err(|e| invalid(&e))?;
    if value.get("request").is_some() {
        let doc = CardDocument::from_json(&json).map_err(|e| invalid(&e))?;
        let options = doc.options(emoji).map_err(|e| invalid(&e))?;
        return Ok((doc.request, options));
    }

    let request = serde_json::from_value::<ParsedRequest>(value).map_err(|e| invalid(&e))?;
    Ok((
        request,
        RenderOptions {
            emoji: emoji.clone(),
            ..RenderOptions::default()
        },
    ))
}
