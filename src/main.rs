//! wp-export-md: write an already-parsed blog export as Markdown files.
//!
//! Reads a JSON array of posts, lays each one out on disk according to the
//! path settings, and writes front matter plus the converted body.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use wp_export_md::{DateFolders, PathConfig, Post, SaveImages, save_posts};

#[derive(Parser, Debug)]
#[command(name = "wp-export-md")]
#[command(about = "Convert exported blog posts to Markdown files", long_about = None)]
struct Cli {
    /// JSON file holding an array of posts
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// JSON config file (kebab-case keys); flags below override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base output directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Partition output by date: none, year, year-month
    #[arg(long, value_name = "MODE")]
    date_folders: Option<DateFolders>,

    /// Prefix file names with the post date (yyyy-mm-dd-)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    prefix_date: Option<bool>,

    /// Give each post its own folder with an index.md
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    post_folders: Option<bool>,

    /// Which images are saved: none, attached, scraped, all, offline
    #[arg(long, value_name = "MODE")]
    save_images: Option<SaveImages>,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn path_config(&self) -> Result<PathConfig> {
        let base = match &self.config {
            Some(path) => PathConfig::from_json_file(path)?,
            None => PathConfig::default(),
        };

        let mut builder = base.to_builder();
        if let Some(output) = &self.output {
            builder = builder.with_output(output);
        }
        if let Some(date_folders) = self.date_folders {
            builder = builder.date_folders(date_folders);
        }
        if let Some(prefix_date) = self.prefix_date {
            builder = builder.prefix_date(prefix_date);
        }
        if let Some(post_folders) = self.post_folders {
            builder = builder.post_folders(post_folders);
        }
        if let Some(save_images) = self.save_images {
            builder = builder.save_images(save_images);
        }
        builder.build()
    }
}

fn log_heading(title: &str) {
    println!("\n===== {title} =====\n");
}

fn read_posts(path: &Path) -> Result<Vec<Post>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read posts file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Posts file {} is not a JSON array of posts", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.path_config()?;

    log_heading("Reading posts");
    let posts = read_posts(&cli.input)?;
    tracing::info!(count = posts.len(), input = %cli.input.display(), "Loaded posts");

    log_heading("Saving posts");
    let written = save_posts(&posts, &config).context("Failed to save posts")?;

    log_heading("Done");
    tracing::info!(
        written = written.len(),
        output = %config.output().display(),
        "Saved all posts"
    );
    Ok(())
}
