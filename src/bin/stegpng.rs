use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use log::{error, info};

use stegpng::{
  payload::{Clue, CLUE_KEYWORD},
  png::{PngDecoder, PngEncoder, ScanlineMode, DEFAULT_COMPRESSION_LEVEL},
};

#[derive(Parser)]
#[command(name = "stegpng")]
#[command(about = "Hide text in PNG tEXt chunks, and get it back out", long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Write a gradient PNG carrying a text chunk
  Embed {
    /// Output file
    #[arg(short, long)]
    output: PathBuf,
    #[arg(long, default_value_t = 200)]
    width: u32,
    #[arg(long, default_value_t = 200)]
    height: u32,
    #[arg(short, long, default_value = CLUE_KEYWORD)]
    keyword: String,
    /// The text to embed
    #[arg(short, long)]
    text: String,
    /// Leave out the per-scanline filter bytes
    #[arg(long)]
    raw_scanlines: bool,
    #[arg(long, default_value_t = DEFAULT_COMPRESSION_LEVEL)]
    level: u8,
  },
  /// Write a gradient PNG carrying a PART1/HASH/BASE64 clue
  Clue {
    #[arg(short, long)]
    output: PathBuf,
    #[arg(short, long)]
    label: String,
    #[arg(short, long)]
    secret: String,
    #[arg(long, default_value_t = 200)]
    width: u32,
    #[arg(long, default_value_t = 200)]
    height: u32,
  },
  /// Print the text chunks of a PNG
  Extract {
    input: PathBuf,
    /// Fail on any bad chunk CRC
    #[arg(long)]
    verify_crc: bool,
    /// Also check and solve a PART1/HASH/BASE64 clue
    #[arg(long)]
    solve: bool,
  },
  /// List the chunks of a PNG
  Inspect { input: PathBuf },
}

fn read(path: &PathBuf) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
  std::fs::read(path).map_err(|e| format!("reading `{}`: {e}", path.display()).into())
}

fn write(path: &PathBuf, bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
  std::fs::write(path, bytes).map_err(|e| format!("writing `{}`: {e}", path.display()))?;
  info!("wrote {} bytes to `{}`", bytes.len(), path.display());
  Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
  match cli.command {
    Commands::Embed { output, width, height, keyword, text, raw_scanlines, level } => {
      let mode = if raw_scanlines { ScanlineMode::Raw } else { ScanlineMode::Filtered };
      let png = PngEncoder::new(width, height)?
        .scanline_mode(mode)
        .compression_level(level)
        .with_text(&keyword, &text)?
        .encode()?;
      write(&output, &png)?;
    }
    Commands::Clue { output, label, secret, width, height } => {
      let clue = Clue::new(&label, &secret)?;
      let mut encoder = PngEncoder::new(width, height)?;
      encoder.push_text(clue.to_payload());
      write(&output, &encoder.encode()?)?;
      println!("{}", clue.to_text());
      println!("answer: {}", clue.flag());
    }
    Commands::Extract { input, verify_crc, solve } => {
      let bytes = read(&input)?;
      let decoder = PngDecoder { verify_crc };
      let texts = decoder.extract_all_text(&bytes)?;
      if texts.is_empty() {
        return Err(stegpng::PngError::PayloadNotFound.into());
      }
      for payload in texts.iter() {
        println!("{}:\n{}", payload.keyword, payload.text);
      }
      if solve {
        let clue = texts
          .iter()
          .find_map(|p| Clue::try_from(p).ok())
          .ok_or(stegpng::PngError::InvalidClue("no text chunk holds a valid clue"))?;
        println!("answer: {}", clue.flag());
      }
    }
    Commands::Inspect { input } => {
      let bytes = read(&input)?;
      let summary = stegpng::png::inspect(&bytes)?;
      if let Some(ihdr) = summary.ihdr {
        println!("{}x{} RGB8", ihdr.width(), ihdr.height());
      }
      for (n, chunk) in summary.chunks.iter().enumerate() {
        let crc = if chunk.crc_ok { "ok" } else { "BAD" };
        println!("{n}: {} len={} crc={crc}", chunk.chunk_type, chunk.length);
      }
      match summary.check_layout() {
        Ok(()) => println!("layout: ok"),
        Err(e) => println!("layout: {e}"),
      }
    }
  }
  Ok(())
}

fn main() -> ExitCode {
  env_logger::init();
  match run(Cli::parse()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{e}");
      eprintln!("error: {e}");
      ExitCode::FAILURE
    }
  }
}
