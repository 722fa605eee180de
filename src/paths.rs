//! Path helpers
//!
//! Pure lexical operations: nothing here touches the filesystem except
//! reading the current working directory to anchor relative inputs.

use std::path::{Component, Path, PathBuf};

/// Return the path of `file` relative to `base`, normalized
///
/// Returns `None` when `file` is absent or empty. Relative inputs are
/// anchored at the current working directory first, so
/// `relative_normpath(Some("a/b.json"), "a")` is `b.json` no matter where
/// the process runs.
///
/// When `file` and `base` sit under different prefixes (Windows drive
/// letters or UNC shares) no relative path exists; the normalized absolute
/// `file` is returned unchanged.
pub fn relative_normpath<P, B>(file: Option<P>, base: B) -> Option<PathBuf>
where
    P: AsRef<Path>,
    B: AsRef<Path>,
{
    let file = file?;
    let file = file.as_ref();
    if file.as_os_str().is_empty() {
        return None;
    }

    let file = normalize_lexically(&absolutize(file));
    let base = normalize_lexically(&absolutize(base.as_ref()));

    let file_parts: Vec<Component<'_>> = file.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) =
        (file_parts.first(), base_parts.first())
    {
        if a != b {
            return Some(file.clone());
        }
    }

    let common = file_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push(Component::ParentDir);
    }
    for part in &file_parts[common..] {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        relative.push(Component::CurDir);
    }
    Some(relative)
}

/// Remove `.` segments and fold `..` into preceding normal segments
///
/// `..` directly under the root stays at the root; leading `..` of a
/// relative path are kept. Symlinks are not resolved.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(Component::CurDir.as_os_str());
    }
    parts.iter().collect()
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_is_absent() {
        assert_eq!(relative_normpath(None::<&str>, "/tmp"), None);
        assert_eq!(relative_normpath(Some(""), "/tmp"), None);
    }

    #[cfg(unix)]
    #[test]
    fn file_below_base() {
        let rel = relative_normpath(Some("/models/nlu/model.json"), "/models");
        assert_eq!(rel, Some(PathBuf::from("nlu/model.json")));
    }

    #[cfg(unix)]
    #[test]
    fn file_beside_base_walks_up() {
        let rel = relative_normpath(Some("/data/train.json"), "/models/nlu/");
        assert_eq!(rel, Some(PathBuf::from("../../data/train.json")));
    }

    #[cfg(unix)]
    #[test]
    fn same_path_is_dot() {
        let rel = relative_normpath(Some("/models/nlu"), "/models/nlu/");
        assert_eq!(rel, Some(PathBuf::from(".")));
    }

    #[cfg(unix)]
    #[test]
    fn redundant_segments_are_removed() {
        let rel = relative_normpath(Some("/models/./nlu/../core//x.pkl"), "/models");
        assert_eq!(rel, Some(PathBuf::from("core/x.pkl")));
    }

    #[test]
    fn relative_inputs_share_cwd() {
        let rel = relative_normpath(Some("a/b/c.json"), "a");
        assert_eq!(rel, Some(Path::new("b").join("c.json")));
    }

    #[test]
    fn no_trailing_separator() {
        let rel = relative_normpath(Some("a/b/"), "a").unwrap();
        assert_eq!(rel, PathBuf::from("b"));
    }

    #[cfg(unix)]
    #[test]
    fn normalize_keeps_root_on_excess_parent() {
        assert_eq!(normalize_lexically(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn normalize_keeps_leading_parent_of_relative_path() {
        assert_eq!(
            normalize_lexically(Path::new("../a/./b/../c")),
            PathBuf::from("../a/c")
        );
    }

    #[test]
    fn normalize_empty_result_is_dot() {
        assert_eq!(normalize_lexically(Path::new("a/..")), PathBuf::from("."));
    }
}
