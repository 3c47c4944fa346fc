mod utils;

use smart_leds::RGB8;
pub use utils::{parse_hex, rgb_from_u32, rgb_to_u32, scale_color};

pub type Rgb = RGB8;

pub const BLACK: Rgb = rgb_from_u32(0x00_00_00);
pub const RED: Rgb = rgb_from_u32(0xFF_00_00);
pub const GREEN: Rgb = rgb_from_u32(0x00_FF_00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00_FF);
/// Warm yellow used for the "away" family
pub const AMBER: Rgb = rgb_from_u32(0xFF_96_00);
