use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http: Http,
    pub log: Log,
    pub store: Store,
    pub session: Session,
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub address: String,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

impl Http {
    /// Both paths, or nothing: TLS is only enabled when the pair is configured.
    pub fn tls_paths(&self) -> Option<(&str, &str)> {
        match (&self.cert_path, &self.key_path) {
            (Some(cert), Some(key)) => Some((cert.as_str(), key.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct Store {
    pub backend: String, // "memory" or "mysql"
    pub mysql_dsn: Option<String>,
    pub seed_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Session {
    pub backend: String, // "store" or "redis"
    pub redis_dsn: Option<String>,
    #[serde(default = "default_session_prefix")]
    pub prefix: String,
}

fn default_session_prefix() -> String {
    "heartline:session".to_string()
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn tls_requires_both_paths() {
        let settings = from_toml(
            r#"
[http]
address = "127.0.0.1:8080"
cert_path = "cert.pem"

[log]
filter = "info"

[store]
backend = "memory"

[session]
backend = "store"
"#,
        );
        assert!(settings.http.tls_paths().is_none());
        assert_eq!(settings.session.prefix, "heartline:session");
        assert!(settings.store.mysql_dsn.is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_settings(Some("settings/does-not-exist")).is_err());
    }

    #[test]
    fn shipped_dev_settings_parse() {
        let settings = parse_settings(Some(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/settings/dev.toml"
        )))
        .unwrap();
        assert_eq!(settings.store.backend, "memory");
    }
}
