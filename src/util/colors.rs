use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x0087936f);
pub const SECONDARY: Color = Color::from_u32(0x00aab391);
pub const NEUTRAL: Color = Color::from_u32(0x0055554c);
pub const BACKGROUND: Color = Color::from_u32(0x00121210);
pub const ACCENT: Color = Color::from_u32(0x00d8cfc0);
pub const GLOW: Color = Color::from_u32(0x002b3124);

/// Linear blend from `from` to `to` by `t`. Non-RGB colors pass through
/// untouched, since terminal palette indices cannot be interpolated.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) = (from, to) else {
        return if t >= 0.5 { to } else { from };
    };
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 { (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8 };
    Color::Rgb(mix(fr, tr), mix(fg, tg), mix(fb, tb))
}

/// Opacity analog: fade `color` toward the background, `alpha` 1.0 leaving
/// it untouched.
pub fn faded(color: Color, alpha: f32) -> Color {
    blend(BACKGROUND, color, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_interpolates_rgb() {
        let mid = blend(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color::Rgb(100, 50, 25));
    }

    #[test]
    fn blend_endpoints_are_exact() {
        let a = Color::Rgb(10, 20, 30);
        let b = Color::Rgb(40, 50, 60);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
    }

    #[test]
    fn full_alpha_leaves_color_untouched() {
        assert_eq!(faded(PRIMARY, 1.0), PRIMARY);
    }
}
