use crossterm::style::Color;

/// Color theme for the TUI. The original app's dark-mode flag becomes
/// explicit session configuration here.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Tile border color
    pub border: Color,
    /// Tile face background
    pub tile_bg: Color,
    /// Tile number color
    pub tile_fg: Color,
    /// Tile number color when the tile sits in its solved position
    pub placed: Color,
    /// Empty cell background
    pub empty_bg: Color,
    /// Selected (cursor) cell background
    pub selected_bg: Color,
    /// Timer/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Success color (solved board, new record)
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            tile_bg: Color::Rgb { r: 40, g: 44, b: 60 },
            tile_fg: Color::Rgb { r: 220, g: 225, b: 240 },
            placed: Color::Rgb { r: 90, g: 255, b: 130 },
            empty_bg: Color::Rgb { r: 25, g: 27, b: 36 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            tile_bg: Color::Rgb { r: 225, g: 228, b: 240 },
            tile_fg: Color::Rgb { r: 30, g: 40, b: 70 },
            placed: Color::Rgb { r: 40, g: 160, b: 60 },
            empty_bg: Color::Rgb { r: 240, g: 240, b: 246 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::Grey,
            tile_bg: Color::DarkGrey,
            tile_fg: Color::White,
            placed: Color::Green,
            empty_bg: Color::Black,
            selected_bg: Color::Blue,
            info: Color::Grey,
            key: Color::Yellow,
            success: Color::Green,
        }
    }
}
