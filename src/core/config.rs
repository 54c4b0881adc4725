use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Platform editor used when neither `--editor` nor $EDITOR/$VISUAL is set.
    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    fn run_editor(editor: &str, path: &Path) -> bool {
        matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
    }

    /// Open the config file in the requested editor, falling back to the
    /// default one.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let fallback = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| fallback.clone());

        if Self::run_editor(&requested, path) {
            success(format!("Configuration file edited using '{}'", requested));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            requested, fallback
        ));

        if requested != fallback && Self::run_editor(&fallback, path) {
            success(format!("Configuration file edited using fallback '{}'", fallback));
            return Ok(());
        }

        Err(AppError::Config(format!(
            "failed to edit {} with '{}'",
            path.display(),
            fallback
        )))
    }
}
