use std::path::{Component, Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Lexically collapse `.` and `..` components. Symlinks are not consulted.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_))) && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Express `path` relative to `base`, emitting `..` segments when `path` lies outside of it.
///
/// Both sides are made absolute against the working directory first. When the two paths
/// live on different prefixes (Windows drives) the absolute path is returned unchanged.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize_lexically(&logical_absolute(path));
    let base = normalize_lexically(&logical_absolute(base));

    if let Ok(stripped) = path.strip_prefix(&base) {
        return if stripped.as_os_str().is_empty() { PathBuf::from(".") } else { stripped.to_path_buf() };
    }

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();
    if path_parts.first() != base_parts.first() {
        return path;
    }

    let shared = path_parts.iter().zip(&base_parts).take_while(|(a, b)| a == b).count();
    let mut rel = PathBuf::new();
    for _ in shared..base_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[shared..] {
        rel.push(part.as_os_str());
    }
    rel
}

/// Render a relative path with `/` separators regardless of platform.
pub fn to_slash_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
