//! Spinner shown while waiting on the backend.

use indicatif::{ProgressBar, ProgressStyle};

/// Start a spinner with `msg`. Hidden entirely when `hidden` is true
/// (quiet mode, JSON output).
pub(crate) fn loading(msg: &str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
