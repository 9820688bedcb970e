use std::env;

/// Expand Windows-style environment variables (%VAR%).
///
/// Variables that are not set are left in place, percent signs included.
pub fn parse_windows_env_vars(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(start) = rest.find('%') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.find('%') {
            Some(end) => {
                let name = &after[..end];
                match lookup(name) {
                    Some(value) => {
                        result.push_str(&value);
                        rest = &after[end + 1..];
                    }
                    None => {
                        // Keep the opening % and retry from the closing one,
                        // which may start a real variable.
                        result.push('%');
                        result.push_str(name);
                        rest = &after[end..];
                    }
                }
            }
            None => {
                result.push('%');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

/// Expand Unix-style environment variables ($VAR and ${VAR}).
///
/// Variables that are not set are left in place.
pub fn parse_unix_env_vars(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(start) = rest.find('$') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                let name = &braced[..end];
                match lookup(name) {
                    Some(value) => result.push_str(&value),
                    None => result.push_str(&rest[start..start + end + 3]),
                }
                rest = &braced[end + 1..];
                continue;
            }
            // Unterminated brace, copy the remainder untouched
            result.push_str(&rest[start..]);
            return result;
        }

        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..name_len];

        match lookup(name) {
            Some(value) => result.push_str(&value),
            None => {
                result.push('$');
                result.push_str(name);
            }
        }
        rest = &after[name_len..];
    }

    result.push_str(rest);
    result
}

/// Expand both variable styles and normalize separators for the current OS
pub fn expand_path(path: &str) -> String {
    let mut expanded = path.to_string();
    if expanded.contains('%') {
        expanded = parse_windows_env_vars(&expanded);
    }
    if expanded.contains('$') {
        expanded = parse_unix_env_vars(&expanded);
    }
    normalize_path_for_os(&expanded)
}

/// Normalize path separators for the current OS
pub fn normalize_path_for_os(path: &str) -> String {
    if cfg!(windows) {
        path.replace('/', "\\")
    } else {
        path.replace('\\', "/")
    }
}

fn lookup(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    env::var(name).ok()
}
