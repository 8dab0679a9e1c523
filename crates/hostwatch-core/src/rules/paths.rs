//! Case-insensitive text and Windows path matching helpers.

/// Case-insensitive substring test.
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive equality using full Unicode lowercasing.
#[must_use]
pub fn eq_ci(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Every pattern from `table` that occurs in `text`, in table order.
#[must_use]
pub fn matches_in<'a>(text: &str, table: &'a [String]) -> Vec<&'a str> {
    let text = text.to_lowercase();
    table
        .iter()
        .filter(|p| text.contains(&p.to_lowercase()))
        .map(String::as_str)
        .collect()
}

/// Returns true if `text` contains any fragment from `table`.
#[must_use]
pub fn contains_any(text: &str, table: &[String]) -> bool {
    let text = text.to_lowercase();
    table.iter().any(|p| text.contains(&p.to_lowercase()))
}

/// Normalize a Windows path for comparison.
///
/// Forward slashes become backslashes, repeated separators collapse,
/// `.` and `..` components are resolved lexically, a trailing separator is
/// dropped and the result is lowercased. Leading `\` and `\\` roots are
/// preserved, so `\??\C:\Windows` stays distinct from `C:\Windows`.
#[must_use]
pub fn normalize(path: &str) -> String {
    let unified = path.trim().replace('/', "\\");
    let (root, rest) = if let Some(rest) = unified.strip_prefix("\\\\") {
        ("\\\\", rest)
    } else if let Some(rest) = unified.strip_prefix('\\') {
        ("\\", rest)
    } else {
        ("", unified.as_str())
    };

    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split('\\') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(last) if *last != ".." && !last.ends_with(':') => {
                    parts.pop();
                }
                Some(last) if last.ends_with(':') => {}
                _ if root.is_empty() => parts.push(".."),
                _ => {}
            },
            _ => parts.push(part),
        }
    }

    format!("{root}{}", parts.join("\\")).to_lowercase()
}

/// Returns true if `path` is `prefix` itself or lies beneath it.
///
/// Matching is on whole components: `C:\Windows\System32evil` is not
/// under `C:\Windows\System32`.
#[must_use]
pub fn is_under(path: &str, prefix: &str) -> bool {
    let path = normalize(path);
    let prefix = normalize(prefix);
    if prefix.is_empty() {
        return false;
    }
    path == prefix || (path.starts_with(&prefix) && path[prefix.len()..].starts_with('\\'))
}

/// Returns true if `path` lies under any prefix in `table`.
#[must_use]
pub fn is_under_any(path: &str, table: &[String]) -> bool {
    table.iter().any(|prefix| is_under(path, prefix))
}
