pub mod calendar;
pub mod export;
pub mod job;
pub mod staff;

use owo_colors::OwoColorize;
use sitecal_types::Rgb;

pub(crate) const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Paint `text` on a background of `hex`, picking a readable foreground
pub(crate) fn paint(text: &str, hex: &str, color: bool) -> String {
    match Rgb::from_hex(hex) {
        Some(Rgb(r, g, b)) if color => {
            let luma = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
            if luma > 150 {
                text.on_truecolor(r, g, b).black().to_string()
            } else {
                text.on_truecolor(r, g, b).white().to_string()
            }
        }
        _ => text.to_string(),
    }
}

/// A small colored square, or nothing without color
pub(crate) fn swatch(hex: &str, color: bool) -> String {
    match Rgb::from_hex(hex) {
        Some(Rgb(r, g, b)) if color => "■".truecolor(r, g, b).to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_without_color_is_identity() {
        assert_eq!(paint("A現場", "#3b82f6", false), "A現場");
        assert_eq!(swatch("#3b82f6", false), "");
    }
}
