use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

/// Mirrors `notes_core::config::RawClientConfig`.
#[derive(Debug, Default, Serialize)]
struct WebClientConfig {
    api_base_url: Option<String>,
    notes_path: Option<String>,
    page_size: Option<String>,
}

fn main() {
    println!("cargo:rerun-if-env-changed=NOTES_API_BASE_URL");
    println!("cargo:rerun-if-env-changed=NOTES_API_PATH");
    println!("cargo:rerun-if-env-changed=NOTES_PAGE_SIZE");

    if let Err(error) = write_web_client_config() {
        println!("cargo:warning=failed to generate web client config: {error}");
    }
}

fn write_web_client_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let config = WebClientConfig {
        api_base_url: env_var_trimmed("NOTES_API_BASE_URL"),
        notes_path: env_var_trimmed("NOTES_API_PATH"),
        page_size: env_var_trimmed("NOTES_PAGE_SIZE"),
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("web-config.json"), content)?;
    Ok(())
}

fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let candidate = manifest_dir.join("..").join("..").join(".env");
    if candidate.exists() {
        println!("cargo:rerun-if-changed={}", candidate.display());
        let _ = dotenvy::from_path(candidate);
    }
}

fn env_var_trimmed(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
