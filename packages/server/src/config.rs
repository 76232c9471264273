use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "svgweb.config.json";
pub const DEFAULT_PORT: u16 = 8082;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Optional config file, read from the working directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    /// Directory holding the .svg files
    #[serde(default)]
    pub svg_dir: Option<PathBuf>,
}

impl Config {
    /// Load `path`, or the default config file in `cwd` when `path` is None.
    ///
    /// A missing default file yields the default config; a missing explicit file is an error.
    pub fn load(path: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = cwd.join(DEFAULT_CONFIG_NAME);
                if !default.exists() {
                    return Ok(Config::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Command line options for serving
#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory containing the .svg files (default: <base>/static/svg)
    #[arg(long)]
    pub svg_dir: Option<PathBuf>,

    /// Config file (default: ./svgweb.config.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Effective settings after merging CLI, environment and config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub svg_dir: PathBuf,
}

impl Settings {
    pub fn resolve(args: ServeArgs, cwd: &Path) -> anyhow::Result<Self> {
        let config = Config::load(args.config.as_deref(), cwd)?;

        Ok(Self {
            host: args
                .host
                .or(config.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: args.port.or(config.port).unwrap_or(DEFAULT_PORT),
            svg_dir: args
                .svg_dir
                .or(config.svg_dir)
                .unwrap_or_else(|| base_dir(cwd).join("static").join("svg")),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Project root: `cwd`, or two levels up when started from `cmd/server`
pub fn base_dir(cwd: &Path) -> PathBuf {
    let is_server_dir = cwd.file_name().is_some_and(|name| name == "server")
        && cwd
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|name| name == "cmd");

    match cwd.parent().and_then(Path::parent) {
        Some(root) if is_server_dir => root.to_path_buf(),
        _ => cwd.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{ "port": 9000, "svgDir": "assets/svg" }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.port, Some(9000));
        assert_eq!(config.svg_dir, Some(PathBuf::from("assets/svg")));
        assert_eq!(config.host, None);
    }

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::resolve(ServeArgs::default(), dir.path()).unwrap();

        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.svg_dir, dir.path().join("static").join("svg"));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "port": 9000, "host": "127.0.0.1", "svgDir": "/srv/svg" }"#,
        )
        .unwrap();

        let args = ServeArgs {
            port: Some(7000),
            ..ServeArgs::default()
        };
        let settings = Settings::resolve(args, dir.path()).unwrap();

        assert_eq!(settings.port, 7000);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.svg_dir, PathBuf::from("/srv/svg"));
        assert_eq!(settings.address(), "127.0.0.1:7000");
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = ServeArgs {
            config: Some(dir.path().join("nope.json")),
            ..ServeArgs::default()
        };
        assert!(Settings::resolve(args, dir.path()).is_err());
    }

    #[test]
    fn test_base_dir_from_cmd_server() {
        assert_eq!(
            base_dir(Path::new("/srv/app/cmd/server")),
            PathBuf::from("/srv/app")
        );
        assert_eq!(base_dir(Path::new("/srv/app")), PathBuf::from("/srv/app"));
        assert_eq!(base_dir(Path::new("/srv/server")), PathBuf::from("/srv/server"));
    }
}
