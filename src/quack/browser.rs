use crate::error::{QuackError, Result};
use std::env;
use std::process::Command;

/// Gets the browser launch command from the environment.
/// Checks $BROWSER, then falls back to the platform opener.
pub fn get_browser() -> String {
    if let Ok(browser) = env::var("BROWSER") {
        if !browser.is_empty() {
            return browser;
        }
    }
    platform_opener().to_string()
}

#[cfg(target_os = "macos")]
fn platform_opener() -> &'static str {
    "open"
}

#[cfg(target_os = "windows")]
fn platform_opener() -> &'static str {
    "explorer"
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener() -> &'static str {
    "xdg-open"
}

/// Launches the destination URL in the user's browser.
pub fn open_in_browser(url: &str) -> Result<()> {
    let browser = get_browser();

    let status = Command::new(&browser)
        .arg(url)
        .status()
        .map_err(|e| QuackError::Api(format!("Failed to launch browser '{}': {}", browser, e)))?;

    if !status.success() {
        return Err(QuackError::Api(format!(
            "Browser '{}' exited with non-zero status",
            browser
        )));
    }

    Ok(())
}
