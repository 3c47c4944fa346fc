use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color back into 0xRRGGBB
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Parse a hex color in `#RRGGBB` or `RRGGBB` form
///
/// Returns `None` for anything that is not exactly six hex digits.
pub fn parse_hex(value: &str) -> Option<Rgb> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(rgb_from_u32)
}

/// Scale a color by a factor in `0.0..=1.0`
///
/// The factor is clamped first. Each channel is multiplied independently
/// and truncated, so the result never exceeds the input channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_color(color: Rgb, factor: f32) -> Rgb {
    if factor.is_nan() || factor <= 0.0 {
        return Rgb::default();
    }
    if factor >= 1.0 {
        return color;
    }
    let scale = |channel: u8| (f32::from(channel) * factor) as u8;
    Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}
