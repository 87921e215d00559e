//! voiceforge CLI entry point.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use voiceforge::backend::{Backend, create_backend};
use voiceforge::cli::Args;
use voiceforge::notify::ConsoleNotifier;
use voiceforge::playback::{AudioSink, NullSink, RodioSink};
use voiceforge::workflow::VoiceCloneWorkflow;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let backend = create_backend(&args.api_url);

    if args.check {
        return check_health(&backend);
    }

    if args.reference.is_none() && args.text.is_none() {
        eprintln!("No action specified. Use -r for a reference voice and -t for the text.");
        eprintln!("Run with --help for usage information.");
        return Ok(());
    }

    let player: Box<dyn AudioSink> = if args.play {
        match RodioSink::try_new() {
            Ok(sink) => Box::new(sink),
            Err(err) => {
                eprintln!("Audio output unavailable ({err}); skipping playback.");
                Box::new(NullSink)
            }
        }
    } else {
        Box::new(NullSink)
    };

    let mut workflow = VoiceCloneWorkflow::new(backend, Box::new(ConsoleNotifier), player);

    if let Some(reference) = &args.reference {
        workflow
            .accept_file(reference)
            .with_context(|| format!("Failed to load reference audio: {}", reference.display()))?;
    }

    if let Some(text) = &args.text {
        workflow.set_text(text);
    }

    println!("Generating voice...");
    workflow.generate().context("Failed to generate voice")?;

    let output_dir = download_dir(args.output_dir);
    let path = workflow
        .download_to(&output_dir)
        .context("Failed to save generated audio")?;

    println!("Audio saved to: {}", path.display());
    if let Some(result) = workflow.result() {
        println!("  Size: {} bytes", result.size());
        if let Some(duration) = result.wav_duration_secs() {
            println!("  Duration: {:.2}s", duration);
        }
    }

    if args.play {
        play_to_end(&mut workflow)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn check_health<B: Backend>(backend: &B) -> Result<()> {
    let health = backend
        .health()
        .context("Generation service is unreachable")?;

    println!("Service status: {}", health.status);
    Ok(())
}

/// Resolve the directory downloads land in: the CLI flag, else the system
/// download directory, else the current directory.
fn download_dir(cli_choice: Option<PathBuf>) -> PathBuf {
    cli_choice
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn play_to_end(workflow: &mut VoiceCloneWorkflow<impl Backend>) -> Result<()> {
    println!("Playing...");
    workflow.toggle_playback().context("Playback failed")?;

    while workflow.is_playing() {
        std::thread::sleep(Duration::from_millis(200));
        workflow.poll_playback();
    }

    Ok(())
}
