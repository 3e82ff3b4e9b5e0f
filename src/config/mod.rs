use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;

use crate::core::TokenInfo;

/// ERC-20 metadata the host uses to answer token lookups
#[derive(Debug, Clone, Deserialize)]
pub struct TokenSpec {
    pub address: String,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tokens: Vec<TokenSpec>,

    /// Interface version announced at init; defaults to the current one
    pub interface_version: Option<u8>,
}

impl TokenSpec {
    pub fn normalized_address(&self) -> String {
        normalize_address(&self.address)
    }

    pub fn display_symbol(&self) -> String {
        self.symbol
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| short_addr(&self.address))
    }

    pub fn parsed_address(&self) -> Option<Address> {
        Address::from_str(&self.normalized_address()).ok()
    }

    /// Token info for provide-info; an entry without decimals cannot scale amounts
    pub fn token_info(&self) -> Option<TokenInfo> {
        Some(TokenInfo {
            ticker: self.display_symbol(),
            decimals: self.decimals?,
        })
    }
}

impl Config {
    /// First configured token with this address
    pub fn token_info(&self, address: &Address) -> Option<TokenInfo> {
        self.tokens
            .iter()
            .find(|token| token.parsed_address().as_ref() == Some(address))
            .and_then(TokenSpec::token_info)
    }
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

/// Load the config from `path`, or from the default location
///
/// A missing or unreadable file yields the default config.
pub fn load(path: Option<&Path>) -> Config {
    let Some(path) = path.map(Path::to_path_buf).or_else(config_path) else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    match parse(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring invalid config");
            Config::default()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("YEARN_PLUGIN_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("yearn-plugin").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("yearn-plugin").join("config.toml"));
    }

    directories::ProjectDirs::from("finance", "yearn", "yearn-plugin")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    let payload = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    format!("0x{}", payload.to_lowercase())
}

fn short_addr(value: &str) -> String {
    let value = value.trim();
    if value.len() <= 10 {
        return value.to_string();
    }
    let start: String = value.chars().take(6).collect();
    let end: String = value
        .chars()
        .rev()
        .take(4)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    format!("{}..{}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
interface_version = 2

[[tokens]]
address = "0XA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48"
symbol = "USDC"
decimals = 6

[[tokens]]
address = "0x6b175474e89094c44da98b954eedeac495271d0f"
"#;

    #[test]
    fn test_parse_tokens() {
        let config = parse(SAMPLE).unwrap();
        assert_eq!(config.interface_version, Some(2));
        assert_eq!(config.tokens.len(), 2);
        assert_eq!(
            config.tokens[0].normalized_address(),
            "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
        );
        assert_eq!(config.tokens[1].display_symbol(), "0x6b17..1d0f");
    }

    #[test]
    fn test_token_info_lookup() {
        let config = parse(SAMPLE).unwrap();
        let usdc = Address::from_str("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").unwrap();
        assert_eq!(
            config.token_info(&usdc),
            Some(TokenInfo {
                ticker: "USDC".to_string(),
                decimals: 6
            })
        );

        // no decimals configured
        let dai = Address::from_str("0x6b175474e89094c44da98b954eedeac495271d0f").unwrap();
        assert_eq!(config.token_info(&dai), None);
        assert_eq!(config.token_info(&Address::ZERO), None);
    }

    #[test]
    fn test_empty_config() {
        let config = parse("").unwrap();
        assert!(config.tokens.is_empty());
        assert_eq!(config.interface_version, None);
    }
}
