//! `ppi config` runs before the stores and client are opened, so it keeps
//! working when `config.toml` does not parse.

use anyhow::Result;
use ppi_infrastructure::ConfigService;

use crate::context::effective_config;

/// Writes a default `config.toml` when none exists; an existing file is left as is.
pub fn init(service: &ConfigService) -> Result<()> {
    let path = service.ensure_config_file()?;
    println!("{}", path.display());
    Ok(())
}

/// Prints the configuration in effect, after env and flag overrides.
pub fn show(service: &ConfigService, api_base: Option<String>) -> Result<()> {
    print!("{}", render(service, api_base)?);
    Ok(())
}

fn render(service: &ConfigService, api_base: Option<String>) -> Result<String> {
    Ok(toml::to_string_pretty(&effective_config(service, api_base)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn init_leaves_unparsable_config_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();
        let service = ConfigService::with_path(path.clone());

        init(&service).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[api\nbase_url = ");
        assert!(render(&service, None).is_err());
    }

    #[test]
    fn show_applies_flag_override() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let rendered = render(&service, Some("http://flag:9000".to_string())).unwrap();
        assert!(rendered.contains("base_url = \"http://flag:9000\""));
    }
}
