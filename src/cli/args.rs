//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Voice cloning demo client.
#[derive(Parser, Debug)]
#[command(name = "voiceforge")]
#[command(about = "Clone a voice from a reference sample and generate speech")]
#[command(version)]
pub struct Args {
    /// Reference voice recording (.wav, .mp3, .m4a, .ogg; up to 10MB)
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// Text to generate in the cloned voice (up to 1000 characters)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Directory for the downloaded audio (defaults to the system download dir)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Generation service base URL
    #[arg(
        long,
        env = "VOICEFORGE_API_URL",
        default_value = "http://localhost:8000"
    )]
    pub api_url: String,

    /// Play the generated audio after saving it
    #[arg(short, long)]
    pub play: bool,

    /// Check generation service health and exit
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
