use std::path::PathBuf;

/// Directory name used under the XDG base directories.
const APP_DIR: &str = "tmux-selector";

/// Returns the user's home directory from the HOME environment variable.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Returns the application config directory
/// (`$XDG_CONFIG_HOME/tmux-selector` or `~/.config/tmux-selector`).
/// Empty values are treated as unset per XDG Base Directory Specification.
pub fn config_dir() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|dir| dir.join(APP_DIR))
}

/// Returns the directory log files are written to
/// (`$XDG_CACHE_HOME/tmux-selector/logs` or `~/.cache/tmux-selector/logs`).
pub fn log_dir() -> Option<PathBuf> {
    xdg_dir("XDG_CACHE_HOME", ".cache").map(|dir| dir.join(APP_DIR).join("logs"))
}

fn xdg_dir(key: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = std::env::var(key).ok().filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg));
    }
    home_dir().map(|home| home.join(home_fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_uses_xdg_config_home_when_set() {
        temp_env::with_vars([("XDG_CONFIG_HOME", Some("/custom/config"))], || {
            assert_eq!(
                config_dir(),
                Some(PathBuf::from("/custom/config/tmux-selector"))
            );
        });
    }

    #[test]
    fn config_dir_falls_back_to_home_dot_config() {
        temp_env::with_vars(
            [
                ("XDG_CONFIG_HOME", None::<&str>),
                ("HOME", Some("/test/home")),
            ],
            || {
                assert_eq!(
                    config_dir(),
                    Some(PathBuf::from("/test/home/.config/tmux-selector"))
                );
            },
        );
    }

    #[test]
    fn log_dir_treats_empty_xdg_as_unset() {
        temp_env::with_vars(
            [("XDG_CACHE_HOME", Some("")), ("HOME", Some("/test/home"))],
            || {
                assert_eq!(
                    log_dir(),
                    Some(PathBuf::from("/test/home/.cache/tmux-selector/logs"))
                );
            },
        );
    }

    #[test]
    fn nothing_resolves_without_home_or_xdg() {
        temp_env::with_vars(
            [("XDG_CACHE_HOME", None::<&str>), ("HOME", None::<&str>)],
            || {
                assert_eq!(log_dir(), None);
            },
        );
    }
}
