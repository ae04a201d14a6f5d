use std::path::{Path, PathBuf};

use tauri::{AppHandle, Manager};

use crate::models::Preferences;

/// Loads the persisted preferences, falling back to defaults when nothing
/// has been saved yet.
#[tauri::command]
pub async fn get_preferences(app_handle: AppHandle) -> Result<Preferences, String> {
    read_preferences(&preferences_path(&app_handle)?)
}

/// Persists the preferences; the frontend calls this on every change.
#[tauri::command]
pub async fn update_preferences(
    app_handle: AppHandle,
    preferences: Preferences,
) -> Result<(), String> {
    write_preferences(&preferences_path(&app_handle)?, &preferences)
}

fn preferences_path(app_handle: &AppHandle) -> Result<PathBuf, String> {
    let data_dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| e.to_string())?;
    Ok(data_dir.join("config").join("preferences.json"))
}

fn read_preferences(path: &Path) -> Result<Preferences, String> {
    if !path.exists() {
        return Ok(Preferences::default());
    }
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}

fn write_preferences(path: &Path, preferences: &Preferences) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    let content = serde_json::to_string_pretty(preferences).map_err(|e| e.to_string())?;
    std::fs::write(path, content).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_the_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("preferences.json");
        let preferences = read_preferences(&path).unwrap();
        assert_eq!(preferences.theme, "light");
    }

    #[test]
    fn saved_preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("preferences.json");
        let dark = Preferences {
            theme: "dark".to_string(),
        };
        write_preferences(&path, &dark).unwrap();
        assert_eq!(read_preferences(&path).unwrap().theme, "dark");
    }
}
