use serde::Deserialize;
use std::collections::HashMap;

use crate::codecs::basex::BaseXAlphabet;
use crate::codecs::{Scheme, base32};
use crate::encoders::algorithms::errors::{AlphabetNotFoundError, find_closest_alphabet};

/// Algorithm behind a named alphabet.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Codec {
    /// Big-number conversion over `chars`
    #[default]
    #[serde(alias = "basex")]
    Radix,
    Base2,
    Base8,
    Base32,
    Base32Hex,
    ZBase32,
    Base64,
    Base64Url,
}

impl Codec {
    pub fn name(&self) -> &'static str {
        match self {
            Codec::Radix => "radix",
            Codec::Base2 => "base2",
            Codec::Base8 => "base8",
            Codec::Base32 => "base32",
            Codec::Base32Hex => "base32_hex",
            Codec::ZBase32 => "z_base32",
            Codec::Base64 => "base64",
            Codec::Base64Url => "base64_url",
        }
    }

    /// Character table of the fixed codecs, for previews.
    fn fixed_chars(&self) -> &'static str {
        match self {
            Codec::Radix => "",
            Codec::Base2 => "01",
            Codec::Base8 => "01234567",
            Codec::Base32 => "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567",
            Codec::Base32Hex => "0123456789ABCDEFGHIJKLMNOPQRSTUV",
            Codec::ZBase32 => "ybndrfg8ejkmcpqxot1uwisza345h769",
            Codec::Base64 => "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
            Codec::Base64Url => "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
        }
    }
}

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    #[serde(default)]
    pub codec: Codec,
    /// Characters in symbol order; only read by `radix` entries
    #[serde(default)]
    pub chars: String,
}

impl AlphabetConfig {
    /// The characters this entry encodes with.
    pub fn effective_chars(&self) -> &str {
        match self.codec {
            Codec::Radix => &self.chars,
            fixed => fixed.fixed_chars(),
        }
    }

    /// The BaseX alphabet for a `radix` entry.
    ///
    /// Character sets matching a built-in preset resolve to that preset, so a
    /// configured base16 alphabet keeps two-leader zero groups.
    pub fn basex(&self) -> Result<BaseXAlphabet, String> {
        BaseXAlphabet::from_chars(&self.chars)
    }

    /// Resolves the entry to something that can encode and decode.
    pub fn scheme(&self) -> Result<Scheme, String> {
        Ok(match self.codec {
            Codec::Radix => Scheme::BaseX(self.basex()?),
            Codec::Base2 => Scheme::Base2,
            Codec::Base8 => Scheme::Base8,
            Codec::Base32 => Scheme::Base32(base32::Variant::Standard),
            Codec::Base32Hex => Scheme::Base32(base32::Variant::Hex),
            Codec::ZBase32 => Scheme::Base32(base32::Variant::Z),
            Codec::Base64 => Scheme::Base64,
            Codec::Base64Url => Scheme::Base64Url,
        })
    }
}

/// Collection of named alphabets loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct AlphabetRegistry {
    pub alphabets: HashMap<String, AlphabetConfig>,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the alphabets bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/bases/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching names.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file(&config_dir.join("bases").join("alphabets.toml"), "user");
        }
        config.merge_file(std::path::Path::new("alphabets.toml"), "local");

        Ok(config)
    }

    fn merge_file(&mut self, path: &std::path::Path, label: &str) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => eprintln!("Warning: Failed to load {} config from {:?}: {}", label, path, e),
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` replace alphabets with the same name in `self`.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
    }

    /// Retrieves an alphabet by name, suggesting a close match when missing.
    pub fn get_alphabet(&self, name: &str) -> Result<&AlphabetConfig, AlphabetNotFoundError> {
        self.alphabets.get(name).ok_or_else(|| {
            AlphabetNotFoundError::new(name, find_closest_alphabet(name, self.alphabets.keys()))
        })
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.alphabets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::EncodeSettings;

    #[test]
    fn test_load_default_config() {
        let config = AlphabetRegistry::load_default().unwrap();
        for name in ["base2", "base8", "base32", "zbase32", "base58btc", "base64url"] {
            assert!(config.alphabets.contains_key(name), "{}", name);
        }
    }

    #[test]
    fn test_every_default_entry_resolves() {
        let config = AlphabetRegistry::load_default().unwrap();
        for name in config.names() {
            let alphabet = config.get_alphabet(name).unwrap();
            let scheme = alphabet.scheme().unwrap();
            let encoded = scheme.encode(b"\0yes mani !", EncodeSettings::default());
            assert_eq!(scheme.decode(&encoded).unwrap(), b"\0yes mani !", "{}", name);
            assert!(!alphabet.effective_chars().is_empty());
        }
    }

    #[test]
    fn test_radix_presets_are_recognised() {
        let config = AlphabetRegistry::load_default().unwrap();
        assert_eq!(
            config.get_alphabet("base16").unwrap().basex().unwrap(),
            BaseXAlphabet::Base16Hex
        );
        assert_eq!(
            config.get_alphabet("base58flickr").unwrap().basex().unwrap(),
            BaseXAlphabet::Base58Flickr
        );
        assert!(matches!(
            config.get_alphabet("base62").unwrap().basex().unwrap(),
            BaseXAlphabet::Custom(_)
        ));
    }

    #[test]
    fn test_codec_defaults_to_radix() {
        let config = AlphabetRegistry::from_toml(
            r#"
[alphabets.custom]
chars = "0123456789"

[alphabets.octal]
codec = "base8"
"#,
        )
        .unwrap();
        let custom = config.get_alphabet("custom").unwrap();
        assert_eq!(custom.codec, Codec::Radix);
        assert_eq!(custom.basex().unwrap(), BaseXAlphabet::Base10Decimal);
        assert_eq!(config.get_alphabet("octal").unwrap().scheme().unwrap(), Scheme::Base8);
    }

    #[test]
    fn test_invalid_radix_chars() {
        let config = AlphabetRegistry::from_toml(
            r#"
[alphabets.short]
chars = "a"

[alphabets.dupes]
chars = "abca"
"#,
        )
        .unwrap();
        assert!(config.get_alphabet("short").unwrap().scheme().is_err());
        assert!(config.get_alphabet("dupes").unwrap().scheme().is_err());
    }

    #[test]
    fn test_unknown_codec_is_rejected() {
        assert!(AlphabetRegistry::from_toml("[alphabets.x]\ncodec = \"base91\"\n").is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let mut config1 = AlphabetRegistry::default();
        config1.alphabets.insert(
            "test1".to_string(),
            AlphabetConfig {
                codec: Codec::Radix,
                chars: "ABC".to_string(),
            },
        );

        let mut config2 = AlphabetRegistry::default();
        config2.alphabets.insert(
            "test1".to_string(),
            AlphabetConfig {
                codec: Codec::Radix,
                chars: "DEF".to_string(),
            },
        );
        config2.alphabets.insert(
            "test2".to_string(),
            AlphabetConfig {
                codec: Codec::Base32,
                chars: String::new(),
            },
        );

        config1.merge(config2);

        assert_eq!(config1.alphabets.len(), 2);
        assert_eq!(config1.get_alphabet("test1").unwrap().chars, "DEF");
        assert_eq!(config1.get_alphabet("test2").unwrap().codec, Codec::Base32);
    }

    #[test]
    fn test_not_found_suggests_close_name() {
        let config = AlphabetRegistry::load_default().unwrap();
        let err = config.get_alphabet("base85btc").unwrap_err();
        assert_eq!(err.name, "base85btc");
        assert_eq!(err.suggestion.as_deref(), Some("base58btc"));

        let err = config.get_alphabet("completely-different").unwrap_err();
        assert_eq!(err.suggestion, None);
    }

    #[test]
    fn test_fixed_codecs_ignore_chars() {
        let alphabet = AlphabetConfig {
            codec: Codec::ZBase32,
            chars: "ignored".to_string(),
        };
        assert_eq!(alphabet.effective_chars(), "ybndrfg8ejkmcpqxot1uwisza345h769");
        assert_eq!(alphabet.scheme().unwrap(), Scheme::Base32(base32::Variant::Z));
    }
}
