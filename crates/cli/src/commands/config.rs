use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clearance_core::config::{AppConfig, LoadOptions};
use toml::Value;

use crate::commands::CommandResult;

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                format!("config validation failed: {error}"),
                2,
            )
        }
    };

    CommandResult::report(0, render(&config))
}

struct Field {
    key: &'static str,
    env_keys: &'static [&'static str],
    value: String,
}

fn render(config: &AppConfig) -> String {
    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let fields = [
        Field {
            key: "server.bind_address",
            env_keys: &["CLEARANCE_SERVER_BIND_ADDRESS"],
            value: config.server.bind_address.clone(),
        },
        Field {
            key: "server.port",
            env_keys: &["CLEARANCE_SERVER_PORT"],
            value: config.server.port.to_string(),
        },
        Field {
            key: "server.graceful_shutdown_secs",
            env_keys: &["CLEARANCE_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            value: config.server.graceful_shutdown_secs.to_string(),
        },
        Field {
            key: "server.allowed_origins",
            env_keys: &["CLEARANCE_SERVER_ALLOWED_ORIGINS"],
            value: config.server.allowed_origins.join(","),
        },
        Field {
            key: "engine.recent_capacity",
            env_keys: &["CLEARANCE_ENGINE_RECENT_CAPACITY"],
            value: config.engine.recent_capacity.to_string(),
        },
        Field {
            key: "engine.popup_item_count",
            env_keys: &["CLEARANCE_ENGINE_POPUP_ITEM_COUNT"],
            value: config.engine.popup_item_count.to_string(),
        },
        Field {
            key: "engine.rng_seed",
            env_keys: &["CLEARANCE_ENGINE_RNG_SEED"],
            value: config
                .engine
                .rng_seed
                .map_or_else(|| "<entropy>".to_string(), |seed| seed.to_string()),
        },
        Field {
            key: "engine.urgency_source",
            env_keys: &["CLEARANCE_ENGINE_URGENCY_SOURCE"],
            value: format!("{:?}", config.engine.urgency_source),
        },
        Field {
            key: "engine.interaction_log_capacity",
            env_keys: &["CLEARANCE_ENGINE_INTERACTION_LOG_CAPACITY"],
            value: config.engine.interaction_log_capacity.to_string(),
        },
        Field {
            key: "logging.level",
            env_keys: &["CLEARANCE_LOGGING_LEVEL", "CLEARANCE_LOG_LEVEL"],
            value: config.logging.level.clone(),
        },
        Field {
            key: "logging.format",
            env_keys: &["CLEARANCE_LOGGING_FORMAT", "CLEARANCE_LOG_FORMAT"],
            value: format!("{:?}", config.logging.format),
        },
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    lines.extend(fields.iter().map(|field| {
        let source = field_source(
            field.key,
            field.env_keys,
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        );
        render_line(field.key, &field.value, source)
    }));

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("clearance.toml"), PathBuf::from("config/clearance.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

#[cfg(test)]
mod tests {
    use toml::Value;

    use super::contains_path;

    #[test]
    fn nested_keys_are_found_in_config_documents() {
        let doc: Value = "[engine]\nrng_seed = 4\n".parse().expect("toml");

        assert!(contains_path(&doc, "engine.rng_seed"));
        assert!(!contains_path(&doc, "engine.recent_capacity"));
        assert!(!contains_path(&doc, "server.port"));
    }
}
