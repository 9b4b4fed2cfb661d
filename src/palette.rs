use anyhow::{anyhow, Result};
use colorsys::Rgb;

use crate::PointerId;

pub type Colour = [u8; 3];

pub const DEFAULT_COLOURS: [Colour; 6] = [
    [0xd8, 0x95, 0xba],
    [0xfc, 0x0d, 0x32],
    [0x7c, 0xd2, 0x8c],
    [0x11, 0x30, 0x28],
    [0xbb, 0x50, 0x75],
    [0x4d, 0x6c, 0x6b],
];

/// Fixed, ordered, non-empty list of stroke colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Result<Self> {
        if colours.is_empty() {
            return Err(anyhow!("Palette needs at least one colour"));
        }
        Ok(Palette { colours })
    }

    pub fn from_hex_strs<S: AsRef<str>>(hex: &[S]) -> Result<Self> {
        let colours = hex
            .iter()
            .map(|s| parse_hex_colour(s.as_ref()))
            .collect::<Result<Vec<Colour>>>()?;
        Palette::new(colours)
    }

    /// Colour for a pointer; ids that differ by a multiple of the palette
    /// length share a colour
    pub fn colour_for(&self, id: PointerId) -> Colour {
        let index = (id % self.colours.len() as u64) as usize;
        self.colours[index]
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colours: DEFAULT_COLOURS.to_vec(),
        }
    }
}

pub fn to_hex_colour(colour: Colour) -> String {
    Rgb::from(colour).to_hex_string()
}

pub fn parse_hex_colour(hex: &str) -> Result<Colour> {
    let rgb = Rgb::from_hex_str(hex)
        .map_err(|e| anyhow!("Invalid colour \"{}\": {:?}", hex, e))?;
    Ok(rgb.into())
}
