use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Probe the usual layouts: run from the workspace, from the crate, or next to the binary.
fn detect_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from("homie_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.extend(["homie_engine/data", "data"].map(|sub| dir.join(sub)));
        if let Some(parent) = dir.parent() {
            candidates.extend(["homie_engine/data", "data"].map(|sub| parent.join(sub)));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.join("world.ron").is_file())
        .unwrap_or_else(|| PathBuf::from("homie_engine/data"))
}
