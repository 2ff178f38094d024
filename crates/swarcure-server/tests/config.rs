use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use swarcure_server::config::{
    CURRENT_VERSION, LogFormat, ServerConfig, StorageBackend, load_config_from, parse_config,
    save_config,
};
use swarcure_server::telemetry::with_startup_logging;

#[test]
fn empty_object_gets_defaults() {
    let config = parse_config("{}").unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.bind_addr, "127.0.0.1:8080");
    assert_eq!(config.storage, StorageBackend::Memory);
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn v0_config_is_migrated() {
    let config = parse_config(
        r#"{ "bind_addr": "0.0.0.0:9000", "storage": { "type": "file", "root": "/var/lib/swarcure" } }"#,
    )
    .unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.bind_addr, "0.0.0.0:9000");
    assert_eq!(
        config.storage,
        StorageBackend::File {
            root: PathBuf::from("/var/lib/swarcure")
        }
    );
}

#[test]
fn newer_versions_are_refused() {
    let err = parse_config(r#"{ "config_version": 99 }"#).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_an_error() {
    assert!(parse_config("[1, 2]").is_err());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = ServerConfig {
        config_version: 0,
        bind_addr: "127.0.0.1:3000".to_string(),
        storage: StorageBackend::File {
            root: dir.path().join("data"),
        },
        log_format: LogFormat::Json,
    };
    save_config(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.log_format, LogFormat::Json);
    assert_eq!(loaded.storage, config.storage);
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn migration_logs_are_kept_before_tracing_is_installed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "bind_addr": "127.0.0.1:4000" }"#).unwrap();

    let captured = Captured::default();
    let writer = captured.clone();
    let config = with_startup_logging(move || writer.clone(), || load_config_from(&path)).unwrap();
    assert_eq!(config.log_format, LogFormat::Text);

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("migrated config v0"), "{output}");
}
