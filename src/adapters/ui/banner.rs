//! Neon ASCII banner with gradient (TECHIBUG).

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Primary (#0ea5e9).
const PRIMARY: (u8, u8, u8) = (0x0e, 0xa5, 0xe9);
/// Accent (#d946ef).
const ACCENT: (u8, u8, u8) = (0xd9, 0x46, 0xef);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

fn set_rgb(out: &mut impl Write, (r, g, b): (u8, u8, u8)) {
    let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
}

/// Prints "TECHIBUG" in the standard figlet font, shaded from primary to accent,
/// then the version line. Falls back to plain text if the font cannot render.
pub fn print_welcome() {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("TECHIBUG").map(|f| f.to_string()))
        .unwrap_or_else(|| "TECHIBUG\n".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        set_rgb(&mut out, lerp_rgb(PRIMARY, ACCENT, t));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    set_rgb(&mut out, ACCENT);
    let _ = out.execute(Print(format!("v{}\r\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.execute(Print("Learn. Build. Squash bugs.\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

/// One-off highlighted line (used for the start-up greeting).
pub fn print_notice(text: &str) {
    let mut out = stdout();
    set_rgb(&mut out, PRIMARY);
    let _ = out.execute(Print(format!("{}\r\n", text)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(PRIMARY, ACCENT, 0.0), PRIMARY);
        assert_eq!(lerp_rgb(PRIMARY, ACCENT, 1.0), ACCENT);
    }

    #[test]
    fn test_lerp_midpoint() {
        assert_eq!(lerp_rgb((0, 0, 0), (200, 100, 50), 0.5), (100, 50, 25));
    }
}
