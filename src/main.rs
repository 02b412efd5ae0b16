use capstrip::{caption, config, output};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{}+{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "capstrip")]
#[command(about = "Append an auto-sized, auto-wrapped caption bar below an image")]
#[command(long_about = "\
Append an auto-sized, auto-wrapped caption bar below an image

The caption is rendered into a solid-color bar added underneath the
original pixels — the source content is never covered or modified.

Layout rules:

  - Captions up to 30 characters use the maximum font size (48px by
    default); longer captions step down one pixel per two extra
    characters, bottoming out at the minimum (24px by default).
  - Lines wrap greedily to fit the image width, keeping a 40px margin.
    A single word wider than the margin overflows rather than being cut.
  - The bar grows to fit: one line advance (font size + 30% leading) per
    wrapped line, plus 20px padding above and below.

Output is written as captioned_<timestamp>_<seq>.png into the output
directory, and the result metadata is printed (use --json for a
machine-readable record).

Run 'capstrip gen-config' for a documented style file covering colors,
font sizes, and custom font faces.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Overlay a caption bar onto an image
    Caption(CaptionArgs),
    /// Print a stock capstrip.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct CaptionArgs {
    /// Source image (JPEG, PNG, or WebP)
    image: PathBuf,

    /// Caption text to render below the image
    caption: String,

    /// Directory for captioned output files
    #[arg(long, default_value = "captioned_output")]
    output_dir: PathBuf,

    /// Style file (see `capstrip gen-config`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Attach `{"user_id": ...}` metadata to the result
    #[arg(long)]
    user_id: Option<String>,

    /// Include the written PNG as a base64 data URI in the result
    #[arg(long)]
    base64: bool,

    /// Print the result record as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Caption(args) => {
            let style = match &args.config {
                Some(path) => config::load_config(path)?.to_style()?,
                None => config::StyleConfig::default().to_style()?,
            };

            let image = load_image(&args.image)?;
            let user_info = args
                .user_id
                .map(|id| BTreeMap::from([("user_id".to_string(), id)]));

            let mut result = caption::overlay_caption(
                &image,
                &args.caption,
                &style,
                user_info,
                &args.output_dir,
            )?;

            if args.base64 {
                result.image_data = Some(png_data_uri(&result.path)?);
            }

            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let plan = caption::plan_layout(
                    image.width(),
                    image.height(),
                    &args.caption,
                    style.max_font_size,
                    style.min_font_size,
                    &style.font,
                );
                output::print_caption_output(&plan, &result);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Decode an image file to RGB.
///
/// Decode failures are this layer's responsibility — the engine only ever
/// sees already-decoded pixel buffers.
fn load_image(path: &Path) -> Result<image::RgbImage, Box<dyn std::error::Error>> {
    let decoded = image::ImageReader::open(path)?
        .decode()
        .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;
    Ok(decoded.to_rgb8())
}

/// Read a written PNG back and encode it as a `data:` URI.
fn png_data_uri(path: &str) -> Result<String, std::io::Error> {
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    let bytes = std::fs::read(path)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}
