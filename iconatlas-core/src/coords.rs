//! Pixel to unit texture coordinates.

use serde::Serialize;

use crate::error::AtlasError;

/// Side length in pixels of the square atlas. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AtlasDimension(f32);

impl AtlasDimension {
    pub fn new(side: f32) -> Result<Self, AtlasError> {
        if side.is_finite() && side > 0.0 {
            Ok(Self(side))
        } else {
            Err(AtlasError::AtlasDimension(side))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelCoord {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct UnitCoord {
    pub x: f32,
    pub y: f32,
}

impl UnitCoord {
    /// False when the pixel position lay outside the atlas the dimension describes.
    pub fn in_unit_square(&self) -> bool {
        (0.0..1.0).contains(&self.x) && (0.0..1.0).contains(&self.y)
    }
}

pub fn normalize(p: PixelCoord, dim: AtlasDimension) -> UnitCoord {
    UnitCoord {
        x: p.x / dim.0,
        y: p.y / dim.0,
    }
}
