//! Rust source literals for generated code

use crate::foundation::math::Vec3;
use crate::render::{Color, TextureHandle};
use std::fmt;

/// A value rendered as Rust source text
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `1.5f32`, `f32::INFINITY`, ...
    Float(f32),
    /// `true` / `false`
    Bool(bool),
    /// Escaped, quoted string
    Str(String),
    /// `Color::from_rgba(r, g, b, a)`
    Color(Color),
    /// `vec3(x, y, z)` with float literals
    Vec3(Vec3),
    /// `Some(<texture expression>)` against the generated `assets`
    Texture(TextureHandle),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(value) => f.write_str(&float_literal(*value)),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "\"{}\"", escape_str(value)),
            Self::Color(c) => write!(f, "Color::from_rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a),
            Self::Vec3(v) => write!(
                f,
                "vec3({}, {}, {})",
                float_literal(v.x),
                float_literal(v.y),
                float_literal(v.z)
            ),
            Self::Texture(TextureHandle::Checkerboard) => f.write_str("Some(assets.checkerboard.clone())"),
        }
    }
}

/// `f32` literal that always parses back to the same bits for finite values.
///
/// `Debug` formatting is the shortest round-trip form and always carries a
/// decimal point or exponent, so the suffix can be appended directly.
pub fn float_literal(value: f32) -> String {
    if value.is_nan() {
        "f32::NAN".to_string()
    } else if value == f32::INFINITY {
        "f32::INFINITY".to_string()
    } else if value == f32::NEG_INFINITY {
        "f32::NEG_INFINITY".to_string()
    } else {
        format!("{value:?}f32")
    }
}

/// Escape text for a double-quoted Rust string literal
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_literals() {
        assert_eq!(float_literal(0.0), "0.0f32");
        assert_eq!(float_literal(4.0), "4.0f32");
        assert_eq!(float_literal(0.1), "0.1f32");
        assert_eq!(float_literal(-2.5), "-2.5f32");
        assert_eq!(float_literal(f32::NAN), "f32::NAN");
        assert_eq!(float_literal(f32::NEG_INFINITY), "f32::NEG_INFINITY");
    }

    #[test]
    fn test_float_literal_round_trips() {
        for value in [1e-7f32, 3.4e38, 9.8, 1.0 / 3.0] {
            let text = float_literal(value);
            let parsed: f32 = text.trim_end_matches("f32").parse().unwrap();
            assert_eq!(parsed.to_bits(), value.to_bits(), "{text}");
        }
    }

    #[test]
    fn test_string_escaping() {
        let lit = Literal::Str("say \"hi\"\\\n\u{1}".to_string());
        assert_eq!(lit.to_string(), r#""say \"hi\"\\\n\u{1}""#);
    }

    #[test]
    fn test_composite_literals() {
        assert_eq!(
            Literal::Color(Color::CORNFLOWER_BLUE).to_string(),
            "Color::from_rgba(100, 149, 237, 255)"
        );
        assert_eq!(
            Literal::Color(Color::rgba(0, 0, 0, 128)).to_string(),
            "Color::from_rgba(0, 0, 0, 128)"
        );
        assert_eq!(Literal::Bool(true).to_string(), "true");
        assert_eq!(
            Literal::Vec3(Vec3::new(10.0, 1.0, 10.0)).to_string(),
            "vec3(10.0f32, 1.0f32, 10.0f32)"
        );
    }
}
