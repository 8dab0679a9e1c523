//! Auto-start entry discovery: registry run keys and startup folders.

use std::path::{Path, PathBuf};

use hostwatch_core::StartupRecord;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::DiscoveryError;
use crate::source::SourceResult;

/// Run keys, checked under both the per-user and machine-wide hives.
pub const RUN_KEYS: &[&str] = &[
    r"Software\Microsoft\Windows\CurrentVersion\Run",
    r"Software\Microsoft\Windows\CurrentVersion\RunOnce",
];

/// Startup folder location relative to `%APPDATA%` / `%PROGRAMDATA%`.
const STARTUP_SUBDIR: &[&str] = &["Microsoft", "Windows", "Start Menu", "Programs", "Startup"];

/// File types picked up from startup folders.
pub const STARTUP_EXTENSIONS: &[&str] = &["exe", "bat", "vbs", "ps1", "lnk", "cmd"];

/// Registry hive to read a run key from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hive {
    /// `HKEY_CURRENT_USER`
    CurrentUser,
    /// `HKEY_LOCAL_MACHINE`
    LocalMachine,
}

impl Hive {
    /// Short hive prefix used in labels.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::CurrentUser => "HKCU",
            Self::LocalMachine => "HKLM",
        }
    }
}

/// Enumerate every run key value, one result per key.
pub fn list_registry_entries() -> Vec<SourceResult<StartupRecord>> {
    let mut results = Vec::new();
    for subkey in RUN_KEYS {
        for hive in [Hive::CurrentUser, Hive::LocalMachine] {
            results.push(read_run_key(hive, subkey));
        }
    }
    results
}

#[cfg(windows)]
fn read_run_key(hive: Hive, subkey: &str) -> SourceResult<StartupRecord> {
    use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ};
    use winreg::RegKey;

    let label = format!(r"{}\{subkey}", hive.prefix());
    let root = match hive {
        Hive::CurrentUser => RegKey::predef(HKEY_CURRENT_USER),
        Hive::LocalMachine => RegKey::predef(HKEY_LOCAL_MACHINE),
    };

    let key = match root.open_subkey_with_flags(subkey, KEY_READ) {
        Ok(key) => key,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(key = %label, "run key not present");
            return SourceResult::ok(label, Vec::new());
        }
        Err(source) => {
            return SourceResult::failed(
                label.clone(),
                DiscoveryError::Registry { key: label, source },
            )
        }
    };

    let mut records = Vec::new();
    for value in key.enum_values() {
        match value {
            Ok((name, data)) => {
                records.push(StartupRecord::registry(name, data.to_string(), label.clone()));
            }
            Err(e) => debug!(key = %label, error = %e, "skipping unreadable value"),
        }
    }
    SourceResult::ok(label, records)
}

#[cfg(not(windows))]
fn read_run_key(hive: Hive, subkey: &str) -> SourceResult<StartupRecord> {
    SourceResult::failed(
        format!(r"{}\{subkey}", hive.prefix()),
        DiscoveryError::Unsupported("registry".into()),
    )
}

/// The per-user and all-users startup folders, with their labels.
#[must_use]
pub fn startup_folders() -> Vec<(&'static str, Option<PathBuf>)> {
    let user = dirs::config_dir().map(|base| startup_dir(&base));
    let common = std::env::var_os("PROGRAMDATA").map(|base| startup_dir(Path::new(&base)));
    vec![("User Startup", user), ("Common Startup", common)]
}

fn startup_dir(base: &Path) -> PathBuf {
    STARTUP_SUBDIR.iter().fold(base.to_path_buf(), |dir, part| dir.join(part))
}

/// Enumerate both startup folders, one result per folder.
pub fn list_folder_entries() -> Vec<SourceResult<StartupRecord>> {
    startup_folders()
        .into_iter()
        .map(|(label, dir)| match dir {
            Some(dir) => list_folder(label, &dir),
            None => {
                debug!(folder = label, "startup folder location unknown");
                SourceResult::ok(label, Vec::new())
            }
        })
        .collect()
}

/// List startup files directly inside `dir` (not recursive).
///
/// A folder that does not exist contributes nothing and is not a failure.
pub fn list_folder(label: &str, dir: &Path) -> SourceResult<StartupRecord> {
    if !dir.exists() {
        debug!(folder = label, path = %dir.display(), "startup folder does not exist");
        return SourceResult::ok(label, Vec::new());
    }

    let mut records = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if entry_error_is_root(&e) => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk failed"));
                return SourceResult::failed(
                    label,
                    DiscoveryError::io(dir.display().to_string(), source),
                );
            }
            Err(e) => {
                debug!(folder = label, error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_startup_extension(entry.path()) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        records.push(StartupRecord::folder(
            name,
            entry.path().display().to_string(),
            label,
        ));
    }

    SourceResult::ok(label, records)
}

/// An error at depth 0 means the folder itself could not be read.
fn entry_error_is_root(e: &walkdir::Error) -> bool {
    e.depth() == 0
}

fn has_startup_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| STARTUP_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostwatch_core::StartupOrigin;

    #[test]
    fn lists_only_startup_file_types() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["run.BAT", "agent.exe", "notes.txt", "link.lnk", "desktop.ini"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.exe")).unwrap();
        std::fs::write(dir.path().join("nested.exe").join("inner.exe"), b"").unwrap();

        let records = list_folder("User Startup", dir.path()).outcome.unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["agent.exe", "link.lnk", "run.BAT"]);

        let first = &records[0];
        assert_eq!(first.origin, StartupOrigin::StartupFolder);
        assert_eq!(first.location, "User Startup");
        assert_eq!(first.command, dir.path().join("agent.exe").display().to_string());
    }

    #[test]
    fn missing_folder_is_empty_not_failed() {
        let dir = tempfile::tempdir().unwrap();
        let result = list_folder("Common Startup", &dir.path().join("absent"));
        assert!(!result.is_failed());
        assert!(result.outcome.unwrap().is_empty());
    }

    #[test]
    fn startup_dir_appends_start_menu_path() {
        let dir = startup_dir(Path::new("base"));
        assert!(dir.ends_with(Path::new("Microsoft/Windows/Start Menu/Programs/Startup")));
    }

    #[test]
    fn registry_yields_one_result_per_key() {
        let results = list_registry_entries();
        assert_eq!(results.len(), 4);
        assert!(results[0].source.starts_with("HKCU"));
        assert!(results[1].source.starts_with("HKLM"));
    }
}
