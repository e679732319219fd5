#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const RED: Color = Color::new_rgb(255, 0, 0);
    pub const GREEN: Color = Color::new_rgb(0, 255, 0);
    pub const BLUE: Color = Color::new_rgb(0, 0, 255);

    pub const PURPLE: Color = Color::new_rgb(128, 0, 128);
    pub const GOLD: Color = Color::new_rgb(255, 215, 0);
    pub const CRIMSON: Color = Color::new_rgb(255, 50, 50);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// A neutral grey of the given intensity.
    #[inline]
    pub const fn grey(level: u8) -> Color {
        Color::new_rgb(level, level, level)
    }
}
