//! Browser utilities
//!
//! Launches the system's default browser for a profile or repository URL.

use std::process::Stdio;
use tokio::process::Command;

/// Platform command that opens a URL with the default handler
fn opener(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    let command = {
        let mut command = Command::new("open");
        command.arg(url);
        command
    };

    #[cfg(target_os = "windows")]
    let command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let command = {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    };

    command
}

/// Open a URL in the system's default browser
///
/// The opener's output is discarded; anything it prints would land on top of
/// the terminal UI.
pub async fn open_url(url: String) {
    let child = opener(&url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let status = match child {
        Ok(mut child) => child.wait().await,
        Err(e) => {
            log::error!("Failed to open {} in browser: {}", url, e);
            return;
        }
    };

    match status {
        Ok(status) if status.success() => log::debug!("Opened {}", url),
        Ok(status) => log::warn!("Browser opener for {} exited with {}", url, status),
        Err(e) => log::error!("Waiting for browser opener failed: {}", e),
    }
}
