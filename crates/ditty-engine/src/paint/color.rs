/// Straight-alpha RGBA color.
///
/// Channels are nominally in `[0, 1]` and are handed to wgpu as-is. The
/// surface is a plain UNORM format by default, so a channel of `0.5` is stored
/// as 128; on an sRGB surface wgpu would treat it as linear light instead.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_sets_full_alpha() {
        assert_eq!(Color::opaque(0.1, 0.2, 0.3).a, 1.0);
    }

    #[test]
    fn converts_to_wgpu_color() {
        let c: wgpu::Color = Color::opaque(0.25, 0.5, 0.75).into();
        assert_eq!(c.r, 0.25);
        assert_eq!(c.g, 0.5);
        assert_eq!(c.b, 0.75);
        assert_eq!(c.a, 1.0);
    }
}
