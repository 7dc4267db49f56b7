use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    /// The theme to use for the room
    #[serde(default)]
    pub theme: SvgRoomTheme,
    /// Draw the cleaning zones on top of the furniture
    #[serde(default = "default_true")]
    pub cleaning_zones: bool,
    /// Draw the cell lines of an occupancy grid with this cell size
    #[serde(default)]
    pub grid_cell_size: Option<i32>,
    /// Highlight items that were put on a fallback slot
    #[serde(default = "default_true")]
    pub highlight_fallbacks: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgRoomTheme::default(),
            cleaning_zones: true,
            grid_cell_size: None,
            highlight_fallbacks: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgRoomTheme {
    pub stroke_width: f32,
    pub wall_fill: Color,
    pub floor_fill: Color,
    pub furniture_fill: Color,
    pub zone_fill: Color,
    pub zone_opacity: f32,
    pub fallback_stroke: Color,
}

impl Default for SvgRoomTheme {
    fn default() -> Self {
        SvgRoomTheme::WARM_WOOD
    }
}

impl SvgRoomTheme {
    pub const WARM_WOOD: SvgRoomTheme = SvgRoomTheme {
        stroke_width: 2.0,
        wall_fill: Color(0x8B, 0x73, 0x55),
        floor_fill: Color(0x8B, 0x45, 0x13),
        furniture_fill: Color(0x65, 0x43, 0x21),
        zone_fill: Color(0x90, 0xEE, 0x90),
        zone_opacity: 0.35,
        fallback_stroke: Color(0xFF, 0x00, 0x00),
    };

    pub const CLEAN_LINEN: SvgRoomTheme = SvgRoomTheme {
        stroke_width: 1.5,
        wall_fill: Color(0xF5, 0xF5, 0xDC),
        floor_fill: Color(0xDE, 0xB8, 0x87),
        furniture_fill: Color(0x8B, 0x73, 0x55),
        zone_fill: Color(0x87, 0xCE, 0xEB),
        zone_opacity: 0.25,
        fallback_stroke: Color(0xFF, 0x45, 0x00),
    };
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Scales the channels of a `#RRGGBB` colour by `fraction`. Malformed colours are returned unchanged.
pub fn change_brightness(color: &str, fraction: f32) -> String {
    let hex = color.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .map(|c| (c as f32 * fraction).clamp(0.0, 255.0) as u8)
    };
    match (hex.len(), channel(0), channel(2), channel(4)) {
        (6, Some(r), Some(g), Some(b)) => Color(r, g, b).to_string(),
        _ => color.to_string(),
    }
}
