//! Configuration file discovery.
//!
//! Discovers `.docsift.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.docsift.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".docsift.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.docsift.toml`) last.
/// Walking stops at a file that sets `root = true`, in which case the global file is skipped.
///
/// Returns an empty vector if no configuration files are found.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.docsift.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_no_config_files() {
        let test_dir = TestDir::new();
        let cwd = test_dir.create_dir("project/src");

        let configs = discover_config_files(&cwd);
        assert!(configs.iter().all(|p| is_global_config(p)));
    }

    #[test]
    fn test_single_config_in_cwd() {
        let test_dir = TestDir::new();
        let config = test_dir.write_config("project", "# test config\n");

        let configs = discover_config_files(&test_dir.path().join("project"));
        assert_eq!(configs.first(), Some(&config));
    }

    #[test]
    fn test_configs_ordered_closest_first() {
        let test_dir = TestDir::new();
        let outer = test_dir.write_config("", "# root config\n");
        let inner = test_dir.write_config("project/docs", "# test config\n");

        let configs = discover_config_files(&test_dir.path().join("project/docs"));
        let inner_pos = configs.iter().position(|p| p == &inner).unwrap();
        let outer_pos = configs.iter().position(|p| p == &outer).unwrap();
        assert!(inner_pos < outer_pos);
    }

    #[test]
    fn test_root_config_stops_traversal() {
        let test_dir = TestDir::new();
        test_dir.write_config("", "# root config\n");
        let root = test_dir.write_config("project", "root = true\n");
        test_dir.create_dir("project/src");

        let configs = discover_config_files(&test_dir.path().join("project/src"));
        assert_eq!(configs, vec![root]);
    }
}
