//! Command-line front end for the fancify engine.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fancify::studio::{identify_font, logo_styles, suggest_font_styles};
use fancify::{
    convert, convert_all, filter_variants, list_styles, svg_document, svg_filename, OutputMode,
    Renderer, StyleFilter,
};

/// Default input when the user gives no text to the `all` listing.
const PLACEHOLDER_TEXT: &str = "Hello World";

/// Extensions the identify command accepts as images.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

#[derive(Parser)]
#[command(name = "fancify", version, about = "Unicode fancy-text generator")]
struct Cli {
    /// Output mode for listings.
    #[arg(long, value_enum, global = true, default_value = "auto")]
    output: OutputArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    /// Detect terminal color support.
    Auto,
    /// Force ANSI styling.
    Term,
    /// Plain text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Auto => OutputMode::Auto,
            OutputArg::Term => OutputMode::Term,
            OutputArg::Text => OutputMode::Text,
            OutputArg::Json => OutputMode::Json,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List the registered styles.
    Styles,
    /// Convert text with a single style.
    Convert {
        text: String,
        /// Style id; unknown ids return the text unchanged.
        #[arg(long, short)]
        style: String,
    },
    /// Show every styled variant of the text.
    All {
        /// Text to convert; defaults to a placeholder when omitted.
        text: Option<String>,
        /// Style id to keep, or "all".
        #[arg(long, short, default_value = "all")]
        style: String,
    },
    /// Export a styled rendering as an SVG document.
    Svg {
        text: String,
        #[arg(long, short)]
        style: String,
        /// Output path; defaults to <style>.svg in the working directory.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Copy a styled rendering to the clipboard.
    Copy {
        text: String,
        #[arg(long, short)]
        style: String,
    },
    /// Suggest font styles for a prompt.
    Suggest { prompt: String },
    /// Identify the font in an image.
    Identify { image: PathBuf },
    /// Preview logo typography for a brand name.
    Logo { brand: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let renderer = Renderer::new(cli.output.into())?;

    match cli.command {
        Command::Styles => emit(&renderer.styles(&list_styles())?),
        Command::Convert { text, style } => println!("{}", convert(&text, &style)),
        Command::All { text, style } => {
            let text = text.unwrap_or_default();
            let input = if text.is_empty() {
                PLACEHOLDER_TEXT
            } else {
                text.as_str()
            };
            let variants = convert_all(input);
            let shown = filter_variants(&variants, &StyleFilter::parse(&style));
            emit(&renderer.variants(&shown)?);
        }
        Command::Svg { text, style, out } => {
            let doc = svg_document(&convert(&text, &style))?;
            let path = out.unwrap_or_else(|| PathBuf::from(svg_filename(&style)));
            std::fs::write(&path, doc)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        Command::Copy { text, style } => {
            let converted = convert(&text, &style);
            let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
            clipboard
                .set_text(converted.clone())
                .context("failed to write to clipboard")?;
            println!("copied: {}", converted);
        }
        Command::Suggest { prompt } => emit(&renderer.suggestions(&suggest_font_styles(&prompt))?),
        Command::Identify { image } => {
            ensure_image(&image)?;
            emit(&renderer.identification(&identify_font(&image))?);
        }
        Command::Logo { brand } => emit(&renderer.logos(&logo_styles(&brand))?),
    }

    Ok(())
}

/// Prints rendered output without doubling the template's trailing newline.
fn emit(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Rejects paths that do not look like images, before any catalog work.
fn ensure_image(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => bail!(
            "{} does not look like an image file (expected one of: {})",
            path.display(),
            IMAGE_EXTENSIONS.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from(["fancify", "convert", "hi", "--style", "bold"]);
        match cli.command {
            Command::Convert { text, style } => {
                assert_eq!(text, "hi");
                assert_eq!(style, "bold");
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_parse_all_defaults() {
        let cli = Cli::parse_from(["fancify", "all"]);
        match cli.command {
            Command::All { text, style } => {
                assert_eq!(text, None);
                assert_eq!(style, "all");
            }
            _ => panic!("expected all"),
        }
        assert_eq!(cli.output, OutputArg::Auto);
    }

    #[test]
    fn test_parse_global_output_flag() {
        let cli = Cli::parse_from(["fancify", "styles", "--output", "json"]);
        assert_eq!(cli.output, OutputArg::Json);
    }

    #[test]
    fn test_ensure_image_accepts_common_extensions() {
        assert!(ensure_image(Path::new("photo.png")).is_ok());
        assert!(ensure_image(Path::new("photo.JPG")).is_ok());
        assert!(ensure_image(Path::new("dir/scan.webp")).is_ok());
    }

    #[test]
    fn test_ensure_image_rejects_other_files() {
        assert!(ensure_image(Path::new("notes.txt")).is_err());
        assert!(ensure_image(Path::new("archive.tar.gz")).is_err());
        assert!(ensure_image(Path::new("noextension")).is_err());
    }
}
