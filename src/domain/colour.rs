//! Colour - Tile fill colours parsed from strings
//!
//! Accepts the CSS named colours (plus `transparent`) and the hex forms
//! `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.

use std::fmt;
use std::str::FromStr;

use gpui::{rgb, Rgba};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A parsed colour value that remembers how it was written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    name: String,
    rgba: Rgba,
}

impl Colour {
    /// The fill used by a tile that is not selected
    pub fn default_fill() -> Self {
        Self {
            name: "red".to_string(),
            rgba: rgb(0xff0000),
        }
    }

    /// The colour as it was written (trimmed and lowercased)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn to_rgba(&self) -> Rgba {
        self.rgba
    }
}

impl FromStr for Colour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let invalid = || Error::InvalidColour {
            value: s.to_string(),
        };

        let rgba = if name.starts_with('#') {
            Rgba::try_from(name.as_str()).map_err(|_| invalid())?
        } else if name == "transparent" {
            Rgba {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.0,
            }
        } else {
            let srgb = palette::named::from_str(&name).ok_or_else(invalid)?;
            Rgba {
                r: f32::from(srgb.red) / 255.0,
                g: f32::from(srgb.green) / 255.0,
                b: f32::from(srgb.blue) / 255.0,
                a: 1.0,
            }
        };

        Ok(Self { name, rgba })
    }
}

impl TryFrom<String> for Colour {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.name
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
