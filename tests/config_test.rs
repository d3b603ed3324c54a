use disaster_monitor::config::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_reads_toml_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("monitor.toml");
    fs::write(
        &path,
        r#"
news_api_key = "file-key"

[feeds]
lookback_days = 14
news_page_size = 5

[server]
port = 9100
"#,
    )?;

    let config = Config::load(Some(&path))?;
    assert_eq!(config.feeds.lookback_days, 14);
    assert_eq!(config.feeds.news_page_size, 5);
    assert_eq!(config.feeds.min_magnitude, 4.5);
    assert!(!config.news_api_key.is_empty());
    Ok(())
}

#[test]
fn test_malformed_toml_is_an_error() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("monitor.toml");
    fs::write(&path, "news_api_key = [unterminated")?;

    assert!(Config::load(Some(&path)).is_err());
    Ok(())
}
