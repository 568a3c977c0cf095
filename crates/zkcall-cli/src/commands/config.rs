use anyhow::{Context, Result};
use zkcall_sdk::config::{self, Settings, ALLOWED_KEYS};

use crate::output;

pub fn set(key: &str, value: &str) -> Result<bool> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    // env overrides must not leak into the file
    let path = config::config_path()?;
    let mut settings = config::load_settings_from(&path)?;
    if let Err(e) = settings.set(key, value) {
        return Err(output::fail_with_hint(
            &e.to_string(),
            "numbers must be positive; addresses are 0x + 40 hex digits; `none` clears",
        ));
    }
    config::save_settings_to(&path, &settings)?;

    if output::is_json() {
        output::json_output(&serde_json::json!({ "key": key, "value": value }));
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(true)
}

/// Prints the effective settings, overrides included.
pub fn show(settings: Settings) -> Result<bool> {
    if output::is_json() {
        let map: serde_json::Map<String, serde_json::Value> = settings
            .entries()
            .into_iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v)))
            .collect();
        output::json_output(&serde_json::Value::Object(map));
    } else {
        for (key, value) in settings.entries() {
            output::label(key, &value);
        }
    }
    Ok(true)
}

pub fn init(force: bool) -> Result<bool> {
    let path = config::config_path()?;
    if path.exists() && !force {
        return Err(output::fail_with_hint(
            &format!("{} already exists", path.display()),
            "pass --force to overwrite it with defaults",
        ));
    }
    config::save_settings_to(&path, &Settings::default())
        .with_context(|| format!("failed to write {}", path.display()))?;

    if output::is_json() {
        output::json_output(&serde_json::json!({ "path": path.display().to_string() }));
    } else {
        output::success(&format!("wrote {}", path.display()));
    }
    Ok(true)
}
