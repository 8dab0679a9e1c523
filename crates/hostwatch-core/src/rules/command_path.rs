//! Executable path extraction from free-form auto-run commands.
//!
//! Registry run values look like `"C:\Program Files\App\app.exe" --tray`,
//! `C:\tools\run.bat arg` or `rundll32.exe shell32.dll,Control_RunDLL`.
//! The extractor finds the leftmost drive-letter path ending in a script or
//! executable extension, preferring a quoted form at the same position.
//! When nothing matches, the whole command is returned unchanged.

use std::sync::OnceLock;

use regex::Regex;

/// Extensions a command path must end with to be extracted.
pub const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "bat", "vbs", "ps1", "cmd"];

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let ext = EXECUTABLE_EXTENSIONS.join("|");
        let body = format!(r#"[a-z]:\\[^"']+\.(?:{ext})"#);
        Regex::new(&format!(r#"(?i)"({body})"|'({body})'|({body})"#))
            .expect("command path pattern is valid")
    })
}

/// Extract the executable path portion of `command`.
///
/// Falls back to the whole command when no drive-letter path with a known
/// extension is present.
#[must_use]
pub fn extract_command_path(command: &str) -> &str {
    pattern()
        .captures(command)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map_or(command, |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_path_with_arguments() {
        assert_eq!(
            extract_command_path(r#""C:\Users\bob\AppData\Local\Temp\update.exe" -silent"#),
            r"C:\Users\bob\AppData\Local\Temp\update.exe"
        );
    }

    #[test]
    fn quoted_path_with_spaces() {
        assert_eq!(
            extract_command_path(r#""C:\Program Files\Vendor\tray app.exe" /background"#),
            r"C:\Program Files\Vendor\tray app.exe"
        );
    }

    #[test]
    fn single_quoted_script() {
        assert_eq!(
            extract_command_path(r"wscript.exe 'D:\scripts\boot.vbs'"),
            r"D:\scripts\boot.vbs"
        );
    }

    #[test]
    fn unquoted_path_stops_at_extension() {
        assert_eq!(
            extract_command_path(r"C:\tools\run.bat --quiet"),
            r"C:\tools\run.bat"
        );
        assert_eq!(
            extract_command_path(r"powershell -File C:\ops\start.PS1"),
            r"C:\ops\start.PS1"
        );
    }

    #[test]
    fn unmatched_quote_falls_back_to_unquoted_form() {
        assert_eq!(extract_command_path(r#""C:\x\agent.exe -a"#), r"C:\x\agent.exe");
    }

    #[test]
    fn no_drive_path_returns_whole_command() {
        let cmd = "rundll32.exe shell32.dll,Control_RunDLL";
        assert_eq!(extract_command_path(cmd), cmd);
        let lnk = r"C:\Users\bob\Start Menu\Programs\Startup\notes.lnk";
        assert_eq!(extract_command_path(lnk), lnk);
        assert_eq!(extract_command_path(""), "");
    }
}
