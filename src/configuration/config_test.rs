use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let doc = res.parse::<toml_edit::Document>();
    assert!(doc.is_ok());

    let doc = doc.unwrap();
    assert_eq!(doc["variant"].as_str(), Some("classic"));
    assert_eq!(doc["reply-policy"].as_str(), Some("keyword"));
    assert_eq!(doc["reply-delay"].as_integer(), Some(1500));
    assert_eq!(doc["balance"].as_str(), Some("₹ 45,230.50"));
    assert!(doc.get("config-file").is_none());
    assert!(doc.get("connectivity-url").is_none());
}

#[test]
fn it_documents_possible_values() {
    let res = Config::serialize_default(cli::build());
    assert!(res.contains("[possible values: classic, facelift]\nvariant = \"classic\""));
    assert!(res.contains("[possible values: supersede, concurrent]\noverlap = \"supersede\""));
    assert!(res.contains("# connectivity-url = \"\""));
}

#[test]
fn it_defaults_every_key() {
    assert_eq!(Config::default(ConfigKey::Language), "en");
    assert_eq!(Config::default(ConfigKey::ReplyDelay), "1500");
    assert_eq!(Config::default(ConfigKey::Overlap), "supersede");
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("bankchat/config.toml"));
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["chat", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["chat", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}

#[test]
fn it_rejects_invalid_millisecond_flags() {
    let cmd = cli::build();
    assert!(cmd
        .clone()
        .try_get_matches_from(vec!["bankchat", "--connectivity-interval", "0"])
        .is_err());
    assert!(cmd
        .clone()
        .try_get_matches_from(vec!["bankchat", "--reply-timeout", "0"])
        .is_err());
    assert!(cmd
        .clone()
        .try_get_matches_from(vec!["bankchat", "--reply-delay", "soon"])
        .is_err());
}

#[test]
fn it_keeps_millisecond_flags_as_strings() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "bankchat",
        "--reply-delay",
        "0",
        "--connectivity-interval",
        "250",
    ])?;

    assert_eq!(
        matches.get_one::<String>(&ConfigKey::ReplyDelay.to_string()),
        Some(&"0".to_string())
    );
    assert_eq!(
        matches.get_one::<String>(&ConfigKey::ConnectivityInterval.to_string()),
        Some(&"250".to_string())
    );
    return Ok(());
}
