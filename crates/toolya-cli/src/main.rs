use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use toolya_media::OutputFormat;

#[derive(Parser)]
#[command(name = "toolya", about = "Everyday file utilities", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge two or more PDF files into one
    Merge {
        /// Input PDF files, merged in the order given
        #[arg(short, long, required = true, num_args = 2..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long, default_value = "merged.pdf")]
        output: PathBuf,
    },

    /// Extract pages from a PDF
    Split {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Page-range expression, e.g. "1-3,5" (order and duplicates are
        /// honored literally)
        #[arg(short, long)]
        pages: String,

        /// Output PDF file
        #[arg(short, long, default_value = "split.pdf")]
        output: PathBuf,
    },

    /// Generate a QR code PNG from text or a URL
    Qr {
        /// Text to encode
        text: String,

        /// Output PNG file
        #[arg(short, long, default_value = "qrcode.png")]
        output: PathBuf,
    },

    /// Download the thumbnail of a YouTube video
    Thumbnail {
        /// Video URL (youtube.com/watch?v=... or youtu.be/...)
        url: String,

        /// Output JPEG file
        #[arg(short, long, default_value = "youtube_thumbnail.jpg")]
        output: PathBuf,

        /// Print the thumbnail URL instead of downloading it
        #[arg(long)]
        url_only: bool,
    },

    /// Re-encode an image to another format
    Convert {
        /// Input image file
        #[arg(short, long)]
        input: PathBuf,

        /// Target format
        #[arg(short, long, default_value = "png", value_enum)]
        format: FormatArg,

        /// Output file (defaults to converted.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Derive a placeholder short link (deterministic, not resolvable)
    Shorten {
        /// URL to shorten; must start with http/https
        url: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Png,
    Jpg,
    Webp,
    Bmp,
    Gif,
    Tiff,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => Self::Png,
            FormatArg::Jpg => Self::Jpeg,
            FormatArg::Webp => Self::WebP,
            FormatArg::Bmp => Self::Bmp,
            FormatArg::Gif => Self::Gif,
            FormatArg::Tiff => Self::Tiff,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Merge { input, output } => {
            let documents = toolya_pdf::load_documents(&input).await?;
            let merged = tokio::task::spawn_blocking(move || {
                toolya_pdf::merge_documents_with(&documents, |progress| {
                    println!(
                        "Merged {}/{} documents ({}%)",
                        progress.completed,
                        progress.total,
                        progress.percent()
                    );
                })
            })
            .await??;

            let page_count = merged.get_pages().len();
            toolya_pdf::save_document(merged, &output).await?;
            println!("{} pages → {}", page_count, output.display());
        }

        Commands::Split {
            input,
            pages,
            output,
        } => {
            let document = toolya_pdf::load_document(&input).await?;
            let result = toolya_pdf::split(document, pages).await?;

            let page_count = result.get_pages().len();
            toolya_pdf::save_document(result, &output).await?;
            println!("{} pages → {}", page_count, output.display());
        }

        Commands::Qr { text, output } => {
            let png = toolya_media::encode_qr_png(&text)?;
            tokio::fs::write(&output, png).await?;
            println!("QR code → {}", output.display());
        }

        Commands::Thumbnail {
            url,
            output,
            url_only,
        } => {
            if url_only {
                println!("{}", toolya_media::thumbnail_url(&url)?);
            } else {
                let bytes = toolya_media::fetch_thumbnail(&url).await?;
                tokio::fs::write(&output, bytes).await?;
                println!("Thumbnail → {}", output.display());
            }
        }

        Commands::Convert {
            input,
            format,
            output,
        } => {
            let format: OutputFormat = format.into();
            let bytes = tokio::fs::read(&input).await?;
            let converted =
                tokio::task::spawn_blocking(move || toolya_media::convert_image(&bytes, format))
                    .await??;

            let output = output.unwrap_or_else(|| PathBuf::from(format.suggested_filename()));
            tokio::fs::write(&output, converted).await?;
            println!("Converted → {}", output.display());
        }

        Commands::Shorten { url } => {
            println!("{}", toolya_media::shorten_url(&url)?);
        }
    }

    Ok(())
}
