use serde::Deserialize;

use crate::coords::PixelCoord;

/// Packer manifest: any root element holding repeated `<Set>` and `<Icon>`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Manifest {
    #[serde(rename = "Set", default)]
    pub sets: Vec<SetRecord>,
    #[serde(rename = "Icon", default)]
    pub icons: Vec<IconRecord>,
}

/// Provenance of a group of icons. Not used when generating.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Url", default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IconRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Set", default)]
    pub set: String,
    #[serde(rename = "X")]
    pub x: f32,
    #[serde(rename = "Y")]
    pub y: f32,
}

impl IconRecord {
    pub fn position(&self) -> PixelCoord {
        PixelCoord {
            x: self.x,
            y: self.y,
        }
    }
}
