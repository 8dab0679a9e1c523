//! Elevated-privilege detection.

/// Returns true if the current process runs with administrator rights.
#[cfg(windows)]
pub fn is_elevated() -> bool {
    is_elevated::is_elevated()
}

/// Returns true if the current user is named `root`.
///
/// Compares the account name, not the effective uid, so a renamed uid-0
/// account reads as unprivileged.
#[cfg(unix)]
pub fn is_elevated() -> bool {
    whoami::username() == "root"
}

/// Elevation cannot be determined; assume none.
#[cfg(not(any(unix, windows)))]
pub const fn is_elevated() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn elevation_follows_account_name() {
        assert_eq!(is_elevated(), whoami::username() == "root");
    }
}
