use crossterm::style::Color;
use rand::Rng;

/// A single confetti particle.
#[derive(Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub char: char,
    pub color: Color,
    pub lifetime: f32,
}

impl Particle {
    pub fn is_visible(&self, width: u16, height: u16) -> bool {
        self.x >= 0.0
            && self.x < width as f32
            && self.y >= 0.0
            && self.y < height as f32
            && self.lifetime > 0.0
    }
}

/// Confetti palette, matching the web original's canvas colors.
pub const CONFETTI_COLORS: [Color; 7] = [
    Color::Rgb { r: 0x26, g: 0xcc, b: 0xff },
    Color::Rgb { r: 0xa2, g: 0x5a, b: 0xfd },
    Color::Rgb { r: 0xff, g: 0x5e, b: 0x7e },
    Color::Rgb { r: 0x88, g: 0xff, b: 0x5a },
    Color::Rgb { r: 0xfc, g: 0xff, b: 0x42 },
    Color::Rgb { r: 0xff, g: 0xa6, b: 0x2d },
    Color::Rgb { r: 0xff, g: 0x36, b: 0xff },
];

/// Confetti characters (circles and squares, like the canvas shapes).
pub const CONFETTI_CHARS: &[char] = &['●', '○', '■', '□', '◆', '◇', '*'];

pub fn random_confetti_color() -> Color {
    let mut rng = rand::thread_rng();
    CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())]
}

/// Convert hue (0.0-1.0) to an RGB color, for rainbow text.
pub fn hue_to_rgb(hue: f32) -> Color {
    let h = hue * 6.0;
    let x = (1.0 - (h % 2.0 - 1.0).abs()) * 255.0;

    let (r, g, b) = match h as i32 % 6 {
        0 => (255, x as u8, 0),
        1 => (x as u8, 255, 0),
        2 => (0, 255, x as u8),
        3 => (0, x as u8, 255),
        4 => (x as u8, 0, 255),
        _ => (255, 0, x as u8),
    };

    Color::Rgb { r, g, b }
}
