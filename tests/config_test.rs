use std::env;
use std::sync::Mutex;

use opsvantage_api::config::Config;
use opsvantage_api::error::ConfigError;

// Mutex to ensure tests that modify env vars don't run in parallel
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in ["DATABASE_URL", "DB_NAME", "PORT", "HOST"] {
        env::remove_var(key);
    }
}

#[test]
fn test_config_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    env::set_var("DATABASE_URL", "data.redb");
    env::set_var("DB_NAME", "opsvantage");

    let config = Config::from_env().unwrap();

    assert_eq!(config.database_url, "data.redb");
    assert_eq!(config.db_name, "opsvantage");
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_address(), "0.0.0.0:8080");

    clear_env();
}

#[test]
fn test_config_overrides() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    env::set_var("DATABASE_URL", "/var/lib/agency.redb");
    env::set_var("DB_NAME", "agency");
    env::set_var("PORT", "9000");
    env::set_var("HOST", "127.0.0.1");

    let config = Config::from_env().unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:9000");

    clear_env();
}

#[test]
fn test_config_requires_database_url() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    env::set_var("DB_NAME", "opsvantage");

    assert_eq!(Config::from_env(), Err(ConfigError::Missing("DATABASE_URL")));

    clear_env();
}

#[test]
fn test_config_requires_non_empty_db_name() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    env::set_var("DATABASE_URL", "data.redb");
    env::set_var("DB_NAME", "  ");

    assert_eq!(Config::from_env(), Err(ConfigError::Missing("DB_NAME")));

    clear_env();
}

#[test]
fn test_config_rejects_invalid_port() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    env::set_var("DATABASE_URL", "data.redb");
    env::set_var("DB_NAME", "opsvantage");
    env::set_var("PORT", "not-a-port");

    assert_eq!(
        Config::from_env(),
        Err(ConfigError::Invalid {
            name: "PORT",
            value: "not-a-port".to_string(),
        })
    );

    clear_env();
}
