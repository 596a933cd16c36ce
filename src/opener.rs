use crate::error::{FolioError, Result};
use std::process::Stdio;
use tokio::process::Command;

pub trait Opener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands URLs to the desktop's default browser. The child is detached with
/// null stdio so the browser never holds a handle back into the terminal.
/// Dropped children are reaped by the tokio runtime.
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        check_web_url(url)?;
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(FolioError::Open(format!("{url}: no runtime to launch the browser")));
        }

        let mut cmd = platform_command(url);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        cmd.spawn()
            .map_err(|e| FolioError::Open(format!("{url}: {e}")))?;
        tracing::info!(url, "opened in browser");
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

// No shell in between: cmd.exe would reinterpret `&` and friends in the URL.
#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> Command {
    let mut cmd = Command::new("rundll32");
    cmd.args(["url.dll,FileProtocolHandler", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

/// Characters that may never appear unencoded in a URL (RFC 3986).
const FORBIDDEN: &[char] = &['"', '<', '>', '\\', '^', '`', '{', '|', '}'];

pub fn check_web_url(url: &str) -> Result<()> {
    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));
    let clean = !url
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(&c));
    match rest {
        Some(host) if !host.is_empty() && clean => Ok(()),
        _ => Err(FolioError::Open(format!("refusing non-web url {url:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_web_urls() {
        assert!(check_web_url("https://github.com/someone/repo").is_ok());
        assert!(check_web_url("HTTP://example.com").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        for url in ["file:///etc/passwd", "javascript:alert(1)", "https://", "example.com", "https://a b"] {
            assert!(
                matches!(check_web_url(url), Err(FolioError::Open(_))),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_shell_metacharacters() {
        for url in [
            "https://x.io/\"&calc",
            "https://x.io/a|calc",
            "https://x.io/^&calc",
            "https://x.io/<script>",
            "https://x.io/\u{7}",
        ] {
            assert!(check_web_url(url).is_err(), "{url} should be rejected");
        }
    }

    #[test]
    fn test_query_strings_stay_valid() {
        assert!(check_web_url("https://github.com/someone?tab=repositories&q=a%20b").is_ok());
    }

    #[test]
    fn test_system_opener_refuses_before_spawning() {
        assert!(SystemOpener.open("ftp://example.com").is_err());
    }

    #[test]
    fn test_system_opener_needs_runtime() {
        let result = SystemOpener.open("https://example.com");
        assert!(matches!(result, Err(FolioError::Open(_))));
    }
}
