//! Styling attribute bag and its resolution into a [`RulerStyle`].
//!
//! Attributes are loose, host-provided values. Each key is parsed on its own;
//! a value that cannot be understood is logged and replaced by its default, so
//! a partially broken attribute set still produces a usable ruler.

use std::fmt;

use serde::Deserialize;

use crate::calibration::{DimensionUnit, DisplayMetrics};
use crate::render::Color;
use crate::style::{RulerStyle, Theme};

/// Errors raised while loading or resolving attributes.
#[derive(Debug)]
pub enum AttributeError {
    /// The attribute document is not valid JSON for an attribute set.
    Json(serde_json::Error),
    /// A dimension value could not be parsed.
    InvalidDimension {
        /// Attribute key.
        key: &'static str,
        /// Offending value.
        value: String,
    },
    /// A color value could not be parsed.
    InvalidColor {
        /// Attribute key.
        key: &'static str,
        /// Offending value.
        value: String,
    },
    /// The value has a type the attribute does not accept.
    UnexpectedType {
        /// Attribute key.
        key: &'static str,
    },
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid attribute document: {err}"),
            Self::InvalidDimension { key, value } => {
                write!(f, "invalid dimension for `{key}`: {value:?}")
            }
            Self::InvalidColor { key, value } => write!(f, "invalid color for `{key}`: {value:?}"),
            Self::UnexpectedType { key } => write!(f, "unexpected value type for `{key}`"),
        }
    }
}

impl std::error::Error for AttributeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AttributeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// A raw attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Numeric value: pixels for dimensions, `0xAARRGGBB` for colors.
    Number(f64),
    /// Textual value such as `"16dp"` or `"#FF4081"`.
    Text(String),
    /// Any other JSON value. Always rejected during resolution.
    Other(serde_json::Value),
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Styling attributes recognized by the ruler.
///
/// Every key is optional. Unknown keys in a JSON document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleAttributes {
    /// `rulerLineWidth` dimension.
    pub ruler_line_width: Option<AttrValue>,
    /// `rulerLineTextSize` dimension.
    pub ruler_line_text_size: Option<AttrValue>,
    /// `rulerLineColor` color.
    pub ruler_line_color: Option<AttrValue>,
    /// `measureLineStrokeWidth` dimension.
    pub measure_line_stroke_width: Option<AttrValue>,
    /// `measureLineColor` color.
    pub measure_line_color: Option<AttrValue>,
    /// `measureTextSize` pixel size.
    pub measure_text_size: Option<AttrValue>,
    /// `measureTextColor` color.
    pub measure_text_color: Option<AttrValue>,
    /// `backgroundColor` color.
    pub background_color: Option<AttrValue>,
}

impl StyleAttributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load attributes from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, AttributeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set an attribute by its key. Returns false for unknown keys.
    pub fn set(&mut self, key: &str, value: impl Into<AttrValue>) -> bool {
        let slot = match key {
            "rulerLineWidth" => &mut self.ruler_line_width,
            "rulerLineTextSize" => &mut self.ruler_line_text_size,
            "rulerLineColor" => &mut self.ruler_line_color,
            "measureLineStrokeWidth" => &mut self.measure_line_stroke_width,
            "measureLineColor" => &mut self.measure_line_color,
            "measureTextSize" => &mut self.measure_text_size,
            "measureTextColor" => &mut self.measure_text_color,
            "backgroundColor" => &mut self.background_color,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }

    /// Set an attribute by its key, builder style.
    pub fn with(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        if !self.set(key, value) {
            log::debug!("ignoring unknown ruler attribute `{key}`");
        }
        self
    }

    /// Resolve the attributes against a theme and display metrics.
    ///
    /// Absent or unparsable values fall back to their defaults.
    pub fn resolve(&self, theme: &Theme, metrics: &DisplayMetrics) -> RulerStyle {
        let defaults = RulerStyle::themed(theme);
        RulerStyle {
            ruler_line_width: or_default(
                dimension("rulerLineWidth", self.ruler_line_width.as_ref(), metrics),
                defaults.ruler_line_width,
            ),
            ruler_text_size: or_default(
                dimension("rulerLineTextSize", self.ruler_line_text_size.as_ref(), metrics),
                defaults.ruler_text_size,
            ),
            ruler_line_color: or_default(
                color("rulerLineColor", self.ruler_line_color.as_ref()),
                defaults.ruler_line_color,
            ),
            measure_line_width: or_default(
                dimension(
                    "measureLineStrokeWidth",
                    self.measure_line_stroke_width.as_ref(),
                    metrics,
                ),
                defaults.measure_line_width,
            ),
            measure_line_color: or_default(
                color("measureLineColor", self.measure_line_color.as_ref()),
                defaults.measure_line_color,
            ),
            measure_text_size: or_default(
                dimension("measureTextSize", self.measure_text_size.as_ref(), metrics)
                    .map(|size| size.map(pixel_size)),
                defaults.measure_text_size,
            ),
            measure_text_color: or_default(
                color("measureTextColor", self.measure_text_color.as_ref()),
                defaults.measure_text_color,
            ),
            background_color: or_default(
                color("backgroundColor", self.background_color.as_ref()),
                defaults.background_color,
            ),
        }
    }
}

fn or_default<T>(value: Result<Option<T>, AttributeError>, default: T) -> T {
    match value {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(err) => {
            log::debug!("{err}; using default");
            default
        }
    }
}

fn dimension(
    key: &'static str,
    value: Option<&AttrValue>,
    metrics: &DisplayMetrics,
) -> Result<Option<f32>, AttributeError> {
    let invalid = |value: String| AttributeError::InvalidDimension { key, value };
    let px = match value {
        None => return Ok(None),
        Some(AttrValue::Number(number)) => *number as f32,
        Some(AttrValue::Text(text)) => {
            parse_dimension(text, metrics).ok_or_else(|| invalid(text.clone()))?
        }
        Some(AttrValue::Other(_)) => return Err(AttributeError::UnexpectedType { key }),
    };
    if !px.is_finite() {
        return Err(invalid(px.to_string()));
    }
    Ok(Some(px))
}

fn color(key: &'static str, value: Option<&AttrValue>) -> Result<Option<Color>, AttributeError> {
    match value {
        None => Ok(None),
        Some(AttrValue::Number(number)) => {
            if number.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(number) {
                Ok(Some(Color::from_argb(*number as u32)))
            } else {
                Err(AttributeError::InvalidColor {
                    key,
                    value: number.to_string(),
                })
            }
        }
        Some(AttrValue::Text(text)) => parse_hex_color(text)
            .map(|argb| Some(Color::from_argb(argb)))
            .ok_or_else(|| AttributeError::InvalidColor {
                key,
                value: text.clone(),
            }),
        Some(AttrValue::Other(_)) => Err(AttributeError::UnexpectedType { key }),
    }
}

/// Parse a dimension such as `"8"`, `"12.5px"` or `"16dp"` into pixels.
pub fn parse_dimension(text: &str, metrics: &DisplayMetrics) -> Option<f32> {
    let text = text.trim();
    let split = text
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    let (number, suffix) = text.split_at(split);
    let value: f32 = number.trim().parse().ok()?;
    let unit = if suffix.is_empty() {
        DimensionUnit::Px
    } else {
        DimensionUnit::parse(&suffix.to_ascii_lowercase())?
    };
    Some(unit.to_px(value, metrics))
}

/// Parse `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB` into a packed ARGB value.
///
/// Colors without an alpha component are opaque.
pub fn parse_hex_color(text: &str) -> Option<u32> {
    let digits = text.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    let expand = |nibbles: u32| {
        (0..nibbles).rev().fold(0u32, |acc, index| {
            let nibble = (value >> (index * 4)) & 0xF;
            (acc << 8) | (nibble << 4) | nibble
        })
    };
    match digits.len() {
        3 => Some(0xFF00_0000 | expand(3)),
        4 => Some(expand(4)),
        6 => Some(0xFF00_0000 | value),
        8 => Some(value),
        _ => None,
    }
}

/// Round a dimension to whole pixels. Non-zero sizes never round to zero.
pub fn pixel_size(px: f32) -> f32 {
    let rounded = (px + 0.5).trunc();
    if rounded != 0.0 {
        rounded
    } else if px == 0.0 {
        0.0
    } else if px > 0.0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_attributes_resolve_to_theme_defaults() {
        let theme = Theme::default();
        let style = StyleAttributes::new().resolve(&theme, &DisplayMetrics::default());
        assert_eq!(style, RulerStyle::themed(&theme));
    }

    #[test]
    fn json_keys_are_camel_case() {
        let attributes = StyleAttributes::from_json(
            r##"{
                "rulerLineWidth": "16dp",
                "rulerLineColor": "#80FF0000",
                "measureTextSize": 30.4,
                "backgroundColor": 4278190335,
                "somethingElse": true
            }"##,
        )
        .expect("valid attributes");
        let metrics = DisplayMetrics::with_ydpi(320.0).with_density(2.0);
        let style = attributes.resolve(&Theme::default(), &metrics);
        assert_eq!(style.ruler_line_width, 32.0);
        assert_eq!(style.ruler_line_color.to_argb(), 0x80FF0000);
        assert_eq!(style.measure_text_size, 30.0);
        assert_eq!(style.background_color.to_argb(), 0xFF0000FF);
    }

    #[test]
    fn invalid_values_fall_back_silently() {
        let attributes = StyleAttributes::from_json(
            r##"{
                "rulerLineWidth": "wide",
                "rulerLineTextSize": false,
                "measureLineColor": "#12345",
                "measureTextColor": -1
            }"##,
        )
        .expect("valid attributes");
        let theme = Theme::default();
        let style = attributes.resolve(&theme, &DisplayMetrics::default());
        assert_eq!(style, RulerStyle::themed(&theme));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = StyleAttributes::from_json("{ rulerLineWidth: ").unwrap_err();
        assert!(matches!(err, AttributeError::Json(_)));
    }

    #[test]
    fn builder_setters_match_json_keys() {
        let attributes = StyleAttributes::new()
            .with("measureLineStrokeWidth", 3.0_f32)
            .with("measureLineColor", 0xFF00FF00_u32)
            .with("notAKey", "ignored");
        let style = attributes.resolve(&Theme::default(), &DisplayMetrics::default());
        assert_eq!(style.measure_line_width, 3.0);
        assert_eq!(style.measure_line_color.to_argb(), 0xFF00FF00);
    }

    #[test]
    fn hex_color_forms() {
        assert_eq!(parse_hex_color("#F00"), Some(0xFFFF0000));
        assert_eq!(parse_hex_color("#8F00"), Some(0x88FF0000));
        assert_eq!(parse_hex_color("#03070A"), Some(0xFF03070A));
        assert_eq!(parse_hex_color("#FF4081"), Some(0xFFFF4081));
        assert_eq!(parse_hex_color("#80FF0000"), Some(0x80FF0000));
        assert_eq!(parse_hex_color("FF0000"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }

    #[test]
    fn dimension_forms() {
        let metrics = DisplayMetrics::with_ydpi(160.0).with_density(1.5);
        assert_eq!(parse_dimension("8", &metrics), Some(8.0));
        assert_eq!(parse_dimension("12.5px", &metrics), Some(12.5));
        assert_eq!(parse_dimension("10 dp", &metrics), Some(15.0));
        assert_eq!(parse_dimension("1in", &metrics), Some(160.0));
        assert_eq!(parse_dimension("3em", &metrics), None);
        assert_eq!(parse_dimension("px", &metrics), None);
    }

    #[test]
    fn pixel_size_rounds_but_keeps_nonzero() {
        assert_eq!(pixel_size(80.0), 80.0);
        assert_eq!(pixel_size(30.5), 31.0);
        assert_eq!(pixel_size(0.2), 1.0);
        assert_eq!(pixel_size(0.0), 0.0);
    }
}
