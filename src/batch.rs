use crate::error::{ResizeError, Result};
use crate::processing::{resize_in_place, ResizeOptions};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Counters accumulated over one batch run.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchSummary {
    pub files_resized: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
}

/// Returns true when the file's extension exactly matches one of the
/// configured extensions. Matching is case-sensitive: `TEXTURE.PNG` is
/// not eligible for the default `png`/`jpg` set.
pub fn is_eligible_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.iter().any(|e| e == ext))
        .unwrap_or(false)
}

/// Collects eligible files from the top level of `dir`, in directory
/// listing order. Subdirectories are not descended into and hidden
/// entries are skipped.
pub fn collect_eligible_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(ResizeError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ResizeError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir).max_depth(1).into_iter();

    // depth 0 is the root directory itself; it must pass the filter even
    // when its own name is dotted (tempdirs usually are)
    for entry in
        walker.filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_eligible_file(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Resizes every file in the list, in order, stopping at the first
/// failure. Files processed before the failure stay modified; files
/// after it are never opened.
pub fn resize_all(files: &[PathBuf], options: &ResizeOptions) -> Result<BatchSummary> {
    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(ProgressStyle::default_bar());

    let mut summary = BatchSummary::default();

    for path in files {
        match resize_in_place(path, options) {
            Ok((before, after)) => {
                summary.files_resized += 1;
                summary.bytes_before += before;
                summary.bytes_after += after;
                progress.inc(1);
            }
            Err(e) => {
                progress.abandon();
                crate::error!("Failed to process {:?}: {}", path, e);
                return Err(e);
            }
        }
    }

    progress.finish_and_clear();
    Ok(summary)
}

/// End-to-end batch run over a directory: collect eligible files, resize
/// each in place, report totals. An empty directory is a successful
/// no-op.
pub fn batch_resize_images(input: PathBuf, options: ResizeOptions) -> Result<()> {
    crate::info!("🚀 Starting batch resize...");
    crate::info!("📁 Input: {:?}", input);
    crate::info!("📐 Target dimensions: {}x{}", options.width, options.height);

    let start_time = Instant::now();

    let files = collect_eligible_files(&input, &options.extensions)?;
    if files.is_empty() {
        crate::warn!("No eligible image files found in {:?}", input);
        return Ok(());
    }

    crate::info!("📊 Found {} image files to process", files.len());

    let summary = resize_all(&files, &options)?;

    let elapsed = start_time.elapsed();
    crate::info!("\n📊 Batch Resize Summary:");
    crate::info!("  📁 Files resized: {}", summary.files_resized);
    crate::info!("  📊 Total size before: {} bytes", summary.bytes_before);
    crate::info!("  📊 Total size after: {} bytes", summary.bytes_after);
    crate::info!("  ⏱️  Total time: {:?}", elapsed);

    Ok(())
}
