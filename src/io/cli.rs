//! Command-line interface for turning images into tiled RLE patterns

use crate::io::configuration::{
    DEFAULT_REPEAT, DEFAULT_RULE, DEFAULT_THRESHOLD, IMAGE_EXTENSIONS, OUTPUT_EXTENSION,
    PREVIEW_CHARS, PREVIEW_ROWS,
};
use crate::io::error::{PatternError, Result, WithPath, invalid_parameter};
use crate::io::image::{load_brightness, sample_to_grid};
use crate::io::progress::ProgressManager;
use crate::rle::document::{assemble_document, parse_document};
use crate::spatial::grid::Grid;
use crate::spatial::patterns::padded_glider;
use crate::spatial::tiles::{stencil_tile, tile};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lifetile")]
#[command(
    author,
    version,
    about = "Tile a Life pattern wherever an image is bright and write the result as RLE"
)]
/// Command-line arguments for the pattern tiling tool
pub struct Cli {
    /// Input image file or directory of images
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Pixels brighter than this (0-255) receive a copy of the base pattern
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Rule string written into the output header
    #[arg(short, long, default_value = DEFAULT_RULE)]
    pub rule: String,

    /// RLE file with the base pattern (defaults to a padded glider)
    #[arg(short, long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Repeat the base pattern horizontally before stencil tiling
    #[arg(short = 'x', long, default_value_t = DEFAULT_REPEAT)]
    pub repeat_x: usize,

    /// Repeat the base pattern vertically before stencil tiling
    #[arg(short = 'y', long, default_value_t = DEFAULT_REPEAT)]
    pub repeat_y: usize,

    /// Suppress progress and informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process images even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch conversion of images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process images according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the base pattern cannot be loaded, the target is
    /// not an image or directory, or any image fails to convert
    pub fn process(&mut self) -> Result<()> {
        let base = self.load_base()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("Nothing to do");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, &base)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Load the base pattern and apply the uniform pre-tiling
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern file cannot be read or parsed, or if
    /// the resulting base pattern is empty
    pub fn load_base(&self) -> Result<Grid> {
        let pattern = match &self.cli.pattern {
            Some(path) => {
                let text = std::fs::read_to_string(path).with_path(path, "read pattern")?;
                let (header, grid) = parse_document(&text)?;
                log::info!(
                    "Loaded {}x{} base pattern ({}) from {}",
                    header.width,
                    header.height,
                    header.rule,
                    path.display()
                );
                grid
            }
            None => padded_glider(),
        };

        if pattern.is_empty() {
            return Err(PatternError::InvalidSourceData {
                reason: "base pattern is empty".to_string(),
            });
        }

        let base = tile(&pattern, self.cli.repeat_x, self.cli.repeat_y);
        if base.is_empty() {
            return Err(invalid_parameter(
                "repeat",
                &format!("{}x{}", self.cli.repeat_x, self.cli.repeat_y),
                &"repeat factors must be at least 1",
            ));
        }

        Ok(base)
    }

    /// Convert one image into a complete RLE document
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded or yields an empty stencil
    pub fn render_image(&self, input_path: &Path, base: &Grid) -> Result<String> {
        let samples = load_brightness(input_path)?;
        let stencil = sample_to_grid(&samples, self.cli.threshold);

        if stencil.is_empty() {
            return Err(PatternError::InvalidSourceData {
                reason: format!("pixel map of '{}' is empty", input_path.display()),
            });
        }

        log::info!(
            "Converted {} to {}x{} pixel map ({} bright)",
            input_path.display(),
            stencil.width(),
            stencil.height(),
            stencil.alive_count()
        );
        let preview = stencil.to_string();
        for line in preview.lines().take(PREVIEW_ROWS) {
            log::debug!("  {line}");
        }
        if stencil.height() > PREVIEW_ROWS {
            log::debug!("  ...");
        }

        let composed = stencil_tile(&stencil, base);
        let document = assemble_document(&composed, &self.cli.rule);

        log::info!(
            "Composed {}x{} grid, {} bytes of RLE",
            composed.width(),
            composed.height(),
            document.len()
        );
        let head: String = document.chars().take(PREVIEW_CHARS).collect();
        let ellipsis = if head.len() < document.len() { "..." } else { "" };
        log::debug!("{head}{ellipsis}");

        Ok(document)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be an image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(&self.cli.target).with_path(&self.cli.target, "read directory")?;
            for entry in entries {
                let path = entry.with_path(&self.cli.target, "read directory")?.path();
                if is_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, base: &Grid) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let document = self.render_image(input_path, base)?;
        std::fs::write(&output_path, document).with_path(&output_path, "write pattern")?;
        log::info!("Wrote RLE to {}", output_path.display());

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    /// Path of the `.rle` file written next to an input image
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        input_path.with_extension(OUTPUT_EXTENSION)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
