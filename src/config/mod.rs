mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./webp-convert.toml", "~/.config/webp-convert/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file: {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.watch.event_buffer == 0 {
        anyhow::bail!("watch.event_buffer must be greater than 0");
    }

    if config.watch.event_buffer > MAX_EVENT_BUFFER {
        anyhow::bail!(
            "watch.event_buffer must be at most {} (got {})",
            MAX_EVENT_BUFFER,
            config.watch.event_buffer
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use webp_convert_common::OutputFormat;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_type, None);
        assert_eq!(config.watch.on_error, ErrorPolicy::Continue);
        assert_eq!(config.watch.event_buffer, 100);
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webp-convert.toml");
        fs::write(
            &path,
            r#"
output_type = "jpg"

[watch]
on_error = "exit"
event_buffer = 8
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.output_type, Some(OutputFormat::Jpeg));
        assert_eq!(config.watch.on_error, ErrorPolicy::Exit);
        assert_eq!(config.watch.event_buffer, 8);
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.output_type, None);
        assert_eq!(config.watch.event_buffer, 100);
    }

    #[test]
    fn test_unknown_output_type_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "output_type = \"gif\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("gif"));
    }

    #[test]
    fn test_zero_event_buffer_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[watch]\nevent_buffer = 0\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_oversized_event_buffer_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[watch]\nevent_buffer = 4611686018427387904\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("at most"));

        fs::write(&path, format!("[watch]\nevent_buffer = {}\n", MAX_EVENT_BUFFER)).unwrap();
        assert_eq!(load_config(&path).unwrap().watch.event_buffer, MAX_EVENT_BUFFER);
    }

    #[test]
    fn test_missing_custom_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(load_config_or_default(Some(&path)).is_err());
    }
}
