use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use lzw_pack::{compress, decompress};

#[derive(Parser)]
#[command(name = "lzw-pack")]
#[command(about = "CLI tool for LZW dictionary compression")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Compress a file
    lzw-pack compress input.txt output.lzw

    # Restore the original
    lzw-pack decompress output.lzw restored.txt

    # Print the size report as JSON
    lzw-pack compress input.txt output.lzw --format json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress a file
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output compressed file
        output: PathBuf,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Decompress a file
    Decompress {
        /// Input compressed file
        input: PathBuf,

        /// Output decompressed file
        output: PathBuf,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Sizes measured while compressing a file.
#[derive(Debug, Serialize)]
pub struct CompressionReport {
    pub original_size: usize,
    pub compressed_size: usize,
    pub ratio: f64,
    /// Negative when the output is larger than the input.
    pub space_saved_percent: f64,
}

impl CompressionReport {
    pub fn new(original_size: usize, compressed_size: usize) -> Self {
        let ratio = if compressed_size > 0 {
            original_size as f64 / compressed_size as f64
        } else {
            0.0
        };
        let space_saved_percent = if original_size > 0 {
            (1.0 - compressed_size as f64 / original_size as f64) * 100.0
        } else {
            0.0
        };
        Self {
            original_size,
            compressed_size,
            ratio,
            space_saved_percent,
        }
    }
}

/// Sizes measured while decompressing a file.
#[derive(Debug, Serialize)]
pub struct DecompressionReport {
    pub compressed_size: usize,
    pub decompressed_size: usize,
}

/// Compress `input` into `output` and print the size report.
pub fn compress_file(input: &Path, output: &Path, format: &str) -> anyhow::Result<()> {
    let data = fs::read(input)
        .with_context(|| format!("failed to read input file '{}'", input.display()))?;

    let compressed = compress(&data);

    fs::write(output, &compressed)
        .with_context(|| format!("failed to write output file '{}'", output.display()))?;

    let report = CompressionReport::new(data.len(), compressed.len());

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Compression complete!");
        println!("Original size: {} bytes", report.original_size);
        println!("Compressed size: {} bytes", report.compressed_size);
        println!("Compression ratio: {:.2}:1", report.ratio);
        if report.space_saved_percent >= 0.0 {
            println!("Space saved: {:.1}%", report.space_saved_percent);
        } else {
            println!("Space expanded: {:.1}%", -report.space_saved_percent);
        }
    }

    Ok(())
}

/// Decompress `input` into `output` and print the size report.
pub fn decompress_file(input: &Path, output: &Path, format: &str) -> anyhow::Result<()> {
    let compressed = fs::read(input)
        .with_context(|| format!("failed to read input file '{}'", input.display()))?;

    let data = decompress(&compressed)
        .with_context(|| format!("failed to decompress '{}'", input.display()))?;

    fs::write(output, &data)
        .with_context(|| format!("failed to write output file '{}'", output.display()))?;

    let report = DecompressionReport {
        compressed_size: compressed.len(),
        decompressed_size: data.len(),
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Decompression complete!");
        println!("Compressed size: {} bytes", report.compressed_size);
        println!("Decompressed size: {} bytes", report.decompressed_size);
    }

    Ok(())
}
