use basen::{base16, base32, base58, base64};
use regex::bytes::Regex;
use serde::Serialize;
use std::{env, fmt, str::FromStr};

const DEFAULT_IGNORE: &str = r"[\t\n\r ]+";

/// Serializes as its typed variant, e.g. `"z-base-32"`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Codec {
    Base16(base16::Variant),
    Base32(base32::Variant),
    Base58(base58::Variant),
    Base58Check(base58::Variant),
    Base64(base64::Variant),
}

impl Codec {
    fn parse(codec: &str, variant: Option<&str>) -> Result<Self, String> {
        fn variant_or_default<T: FromStr<Err = basen::Error> + Default>(variant: Option<&str>) -> Result<T, String> {
            variant.map_or(Ok(T::default()), |variant| variant.parse().map_err(|error: basen::Error| error.to_string()))
        }
        match codec.to_ascii_lowercase().as_str() {
            "base16" | "hex" => Ok(Codec::Base16(variant_or_default(variant)?)),
            "base32" => Ok(Codec::Base32(variant_or_default(variant)?)),
            "base58" => Ok(Codec::Base58(variant_or_default(variant)?)),
            "base58check" => Ok(Codec::Base58Check(variant_or_default(variant)?)),
            "base64" => Ok(Codec::Base64(variant_or_default(variant)?)),
            _ => Err(format!("Invalid CODEC {}", codec)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Codec::Base16(_) => "base16",
            Codec::Base32(_) => "base32",
            Codec::Base58(_) => "base58",
            Codec::Base58Check(_) => "base58check",
            Codec::Base64(_) => "base64",
        }
    }

    pub fn variant(&self) -> &'static str {
        match self {
            Codec::Base16(variant) => variant.name(),
            Codec::Base32(variant) => variant.name(),
            Codec::Base58(variant) | Codec::Base58Check(variant) => variant.name(),
            Codec::Base64(variant) => variant.name(),
        }
    }

    fn supports_padding(&self) -> bool {
        matches!(self, Codec::Base32(_) | Codec::Base64(_))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encode => write!(f, "encode"),
            Mode::Decode => write!(f, "decode"),
        }
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode.to_ascii_lowercase().as_str() {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            _ => Err(()),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Output {
    Text,
    Json,
}

impl FromStr for Output {
    type Err = ();

    fn from_str(output: &str) -> Result<Self, Self::Err> {
        match output.to_ascii_lowercase().as_str() {
            "text" => Ok(Output::Text),
            "json" => Ok(Output::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    codec: Codec,
    mode: Mode,
    padded: Option<bool>,
    ignore: Regex,
    output: Output,
    verbose: bool,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, String> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, String> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let codec = var(&lookup, "CODEC", None)?;
        let variant = lookup("VARIANT");
        let codec = Codec::parse(&codec, variant.as_deref())?;
        let mode = var_map(&lookup, "MODE", |mode| mode.parse(), Some(Mode::Encode))?;
        let padded = var_map(&lookup, "PADDED", |padded| padded.parse().map(Some), Some(None))?;
        if padded.is_some() && !codec.supports_padding() {
            return Err(format!("PADDED is not supported by {}", codec.name()));
        }
        let default_ignore = Regex::new(DEFAULT_IGNORE).map_err(|error| error.to_string())?;
        let ignore = var_map(&lookup, "IGNORE", Regex::new, Some(default_ignore))?;
        let output = var_map(&lookup, "OUTPUT", |output| output.parse(), Some(Output::Text))?;
        let verbose = var_map(&lookup, "VERBOSE", |verbose| verbose.parse(), Some(false))?;
        Ok(Self {
            codec,
            mode,
            padded,
            ignore,
            output,
            verbose,
        })
    }

    pub fn codec(&self) -> Codec {
        self.codec
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn padded(&self) -> Option<bool> {
        self.padded
    }

    pub fn ignore(&self) -> &Regex {
        &self.ignore
    }

    pub fn output(&self) -> Output {
        self.output
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::{Codec, Configuration, Mode, Output};
    use basen::{base16, base32, base58, base64};
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<Configuration, String> {
        let vars: HashMap<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Configuration::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let configuration = from_vars(&[("CODEC", "base32")]).unwrap();
        assert_eq!(configuration.codec(), Codec::Base32(base32::Variant::Rfc4648));
        assert_eq!(configuration.mode(), Mode::Encode);
        assert_eq!(configuration.padded(), None);
        assert_eq!(configuration.output(), Output::Text);
        assert!(!configuration.verbose());
        assert_eq!(&*configuration.ignore().replace_all(b"AB\r\nCD ", &b""[..]), &b"ABCD"[..]);
    }

    #[test]
    fn variants() {
        let configuration = from_vars(&[("CODEC", "base58check"), ("VARIANT", "ripple"), ("MODE", "decode")]).unwrap();
        assert_eq!(configuration.codec(), Codec::Base58Check(base58::Variant::Ripple));
        assert_eq!(configuration.codec().variant(), "ripple");
        assert_eq!(configuration.mode(), Mode::Decode);
        let codec = |codec: &str, variant: &str| from_vars(&[("CODEC", codec), ("VARIANT", variant)]).unwrap().codec();
        assert_eq!(codec("hex", "invariant"), Codec::Base16(base16::Variant::Invariant));
        assert_eq!(codec("base64", "url-safe"), Codec::Base64(base64::Variant::UrlSafe));
    }

    #[test]
    fn serialize() {
        let codec = from_vars(&[("CODEC", "base32"), ("VARIANT", "z-base-32")]).unwrap().codec();
        assert_eq!(serde_json::to_value(codec).unwrap(), "z-base-32");
        assert_eq!(serde_json::to_value(Codec::Base58Check(base58::Variant::Flickr)).unwrap(), "flickr");
        assert_eq!(serde_json::to_value(Codec::Base16(base16::Variant::ModHex)).unwrap(), "mod-hex");
    }

    #[test]
    fn padding() {
        let configuration = from_vars(&[("CODEC", "base64"), ("PADDED", "false")]).unwrap();
        assert_eq!(configuration.padded(), Some(false));
        assert_eq!(
            from_vars(&[("CODEC", "base58"), ("PADDED", "true")]).err(),
            Some("PADDED is not supported by base58".to_string())
        );
        assert_eq!(
            from_vars(&[("CODEC", "base32"), ("PADDED", "maybe")]).err(),
            Some("Invalid PADDED maybe".to_string())
        );
    }

    #[test]
    fn errors() {
        assert_eq!(from_vars(&[]).err(), Some("Missing CODEC".to_string()));
        assert_eq!(from_vars(&[("CODEC", "base85")]).err(), Some("Invalid CODEC base85".to_string()));
        assert_eq!(
            from_vars(&[("CODEC", "base32"), ("VARIANT", "bitcoin")]).err(),
            Some("Unsupported base32 format 'bitcoin'".to_string())
        );
        assert_eq!(
            from_vars(&[("CODEC", "base32"), ("MODE", "verify")]).err(),
            Some("Invalid MODE verify".to_string())
        );
        assert!(from_vars(&[("CODEC", "base32"), ("IGNORE", "[")]).is_err());
    }
}
