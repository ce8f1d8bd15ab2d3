use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_SUFFIX: &str = "_BW";

/// Inserts `suffix` between the file stem and its extension, keeping the
/// directory: `dir/photo.jpg` + `_BW` -> `dir/photo_BW.jpg`.
///
/// An empty suffix gives back the input path unchanged.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Replaces a leading `~` component with the home directory.
pub fn expand_path(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match home_dir() {
            Some(home) => {
                let rest = components.as_path();
                if rest.as_os_str().is_empty() {
                    home
                } else {
                    home.join(rest)
                }
            }
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}
