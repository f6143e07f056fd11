use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Parse a `#rrggbb` literal
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorSwatch {
    pub value: &'static str,
    pub label: &'static str,
    pub rgb: Rgb,
}

pub const PALETTE: [ColorSwatch; 10] = [
    ColorSwatch { value: "bg-blue-500", label: "青", rgb: Rgb(0x3b, 0x82, 0xf6) },
    ColorSwatch { value: "bg-green-500", label: "緑", rgb: Rgb(0x22, 0xc5, 0x5e) },
    ColorSwatch { value: "bg-orange-500", label: "オレンジ", rgb: Rgb(0xf9, 0x73, 0x16) },
    ColorSwatch { value: "bg-purple-500", label: "紫", rgb: Rgb(0xa8, 0x55, 0xf7) },
    ColorSwatch { value: "bg-red-500", label: "赤", rgb: Rgb(0xef, 0x44, 0x44) },
    ColorSwatch { value: "bg-yellow-500", label: "黄", rgb: Rgb(0xea, 0xb3, 0x08) },
    ColorSwatch { value: "bg-pink-500", label: "ピンク", rgb: Rgb(0xec, 0x48, 0x99) },
    ColorSwatch { value: "bg-indigo-500", label: "藍", rgb: Rgb(0x63, 0x66, 0xf1) },
    ColorSwatch { value: "bg-teal-500", label: "ティール", rgb: Rgb(0x14, 0xb8, 0xa6) },
    ColorSwatch { value: "bg-cyan-500", label: "シアン", rgb: Rgb(0x06, 0xb6, 0xd4) },
];

pub const UNKNOWN_COLOR_LABEL: &str = "不明";
const UNKNOWN_RGB: Rgb = Rgb(0x9c, 0xa3, 0xaf);

pub fn find_swatch(value: &str) -> Option<&'static ColorSwatch> {
    PALETTE.iter().find(|s| s.value == value)
}

/// Whether a staff color value is accepted by the roster editor
pub fn is_valid_color(value: &str) -> bool {
    find_swatch(value).is_some() || Rgb::from_hex(value).is_some()
}

/// RGB for a palette identifier or `#rrggbb` literal; grey when unknown
pub fn resolve_color(value: &str) -> Rgb {
    find_swatch(value)
        .map(|s| s.rgb)
        .or_else(|| Rgb::from_hex(value))
        .unwrap_or(UNKNOWN_RGB)
}

pub fn color_label(value: &str) -> &'static str {
    find_swatch(value)
        .map(|s| s.label)
        .unwrap_or(UNKNOWN_COLOR_LABEL)
}
