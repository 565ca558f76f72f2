use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::Rgb8,
    error::{RoughwalkError, RoughwalkResult},
};

/// Parse `#RRGGBB`, `RRGGBB` or the short `#RGB` form (case-insensitive).
pub fn parse_hex(s: &str) -> RoughwalkResult<Rgb8> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> RoughwalkResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| RoughwalkError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RoughwalkError::validation(format!(
            "invalid hex color \"{s}\""
        )));
    }
    match s.len() {
        6 => Ok(Rgb8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        3 => {
            let nib = |i: usize| hex_byte(&s[i..i + 1]).map(|v| v * 17);
            Ok(Rgb8::new(nib(0)?, nib(1)?, nib(2)?))
        }
        _ => Err(RoughwalkError::validation(
            "hex color must be #RRGGBB or #RGB (case-insensitive)",
        )),
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj { r: u8, g: u8, b: u8 },
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Self::new(r, g, b)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::new(*r, *g, *b)),
                _ => Err(serde::de::Error::custom(
                    "rgb array must have exactly 3 entries ([r,g,b])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/color.rs"]
mod tests;
