use crate::display::{BoundingBox, Color};
use crate::instruction::{Brightness, Scale};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::io;

/// largest value either pen coordinate can hold
const COORD_MAX: f64 = 1023.0;

/// a point offset, in display-processor units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Knobs for aligning the picture with a particular display processor and
/// for how the output should look. Like a photo, really.
///
/// Missing fields in a JSON options file take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub ratio_d1: f64,
    pub ratio_d2: f64,
    pub ratio_d3: f64,
    pub ratio_bex: f64,
    /// origin of the D1/BEX graticule area
    pub offset_d1: Offset,
    /// origin of the full-screen (D2/D3) area
    pub offset_full: Offset,
    pub margin: f64,
    /// horizontal stretch
    pub aspect: f64,
    pub color_normal: Color,
    pub color_dim: Color,
    pub color_bright: Color,
    pub color_background: Color,
    pub pen_width: f64,
    /// instructions per pass before the program is declared runaway
    pub max_steps: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            ratio_d1: 1.0,
            ratio_d2: 1.13,
            ratio_d3: 1.68,
            ratio_bex: 1.55,
            offset_d1: Offset { x: 136.0, y: 83.0 },
            offset_full: Offset { x: 0.0, y: 0.0 },
            margin: 20.0,
            aspect: 1.3,
            color_normal: Color::Black,
            color_dim: Color::Blue,
            color_bright: Color::Red,
            color_background: Color::White,
            pen_width: 3.0,
            max_steps: 1_000_000,
        }
    }
}

impl RenderOptions {
    /// load from JSON; anything left out keeps its default
    pub fn from_json(reader: impl io::Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn ratio(&self, scale: Scale) -> f64 {
        match scale {
            Scale::D1 => self.ratio_d1,
            Scale::D2 => self.ratio_d2,
            Scale::Bex => self.ratio_bex,
            Scale::D3 => self.ratio_d3,
        }
    }

    pub fn offset(&self, scale: Scale) -> Offset {
        if scale.full_screen() {
            self.offset_full
        } else {
            self.offset_d1
        }
    }

    pub fn color(&self, brightness: Brightness) -> Color {
        match brightness {
            Brightness::Normal => self.color_normal,
            Brightness::Dim => self.color_dim,
            Brightness::Bright => self.color_bright,
        }
    }

    /// height of the drawable area; the CRT is sized for D2
    pub fn screen_height(&self) -> f64 {
        COORD_MAX * self.ratio_d2
    }

    /// the area handed to the sink, margins included
    pub fn bounding_box(&self) -> BoundingBox {
        let ym = self.screen_height();
        BoundingBox {
            x0: 0.0,
            y0: 0.0,
            x1: 2.0 * self.margin + self.aspect * ym,
            y1: 2.0 * self.margin + ym,
        }
    }

    /// map a 10-bit pen position to sink coordinates, y pointing down
    pub fn to_sink(&self, x: u16, y: u16, ratio: f64, offset: Offset) -> (f64, f64) {
        (
            self.margin + self.aspect * (ratio * x as f64 + offset.x),
            self.margin + self.screen_height() - (ratio * y as f64 + offset.y),
        )
    }
}
