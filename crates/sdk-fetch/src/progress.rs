//! Progress reporting for downloads.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}";
const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {bytes} {msg}";

/// Creates progress bars for downloads, drawn on stderr
#[derive(Debug, Clone)]
pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enable progress only when stderr is attached to a terminal
    pub fn for_terminal() -> Self {
        Self::new(Term::stderr().is_term())
    }

    /// Create a download bar. It starts as a spinner and switches to a sized
    /// bar once the first update reports a known total.
    pub fn create_download_bar(&self, name: &str) -> DownloadBar {
        if !self.enabled {
            return DownloadBar::new(ProgressBar::hidden());
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style());
        pb.set_message(name.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        DownloadBar::new(pb)
    }

    /// Check if progress is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::for_terminal()
    }
}

/// A single download's progress indicator
pub struct DownloadBar {
    bar: ProgressBar,
    sized: AtomicBool,
}

impl DownloadBar {
    fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            sized: AtomicBool::new(false),
        }
    }

    /// Report cumulative bytes against the expected total (0 = unknown)
    pub fn update(&self, downloaded: u64, total: u64) {
        if total > 0 && !self.sized.swap(true, Ordering::Relaxed) {
            self.bar.set_length(total);
            self.bar.set_style(bar_style());
        }
        self.bar.set_position(downloaded);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Whether a total size has been reported
    pub fn is_sized(&self) -> bool {
        self.sized.load(Ordering::Relaxed)
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template(SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Helper to format bytes for display
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GB");
    }

    #[test]
    fn test_progress_manager_disabled() {
        let pm = ProgressManager::new(false);
        assert!(!pm.is_enabled());
    }

    #[test]
    fn test_unknown_total_stays_indeterminate() {
        let bar = ProgressManager::new(false).create_download_bar("sdk.zip");

        bar.update(1024, 0);
        bar.update(4096, 0);

        assert!(!bar.is_sized());
        assert_eq!(bar.position(), 4096);
        bar.finish();
    }

    #[test]
    fn test_known_total_sizes_bar() {
        let bar = ProgressManager::new(false).create_download_bar("sdk.zip");

        bar.update(100, 400);
        assert!(bar.is_sized());
        assert_eq!(bar.position(), 100);

        bar.update(400, 400);
        assert_eq!(bar.position(), 400);
        bar.finish();
    }
}
