//! Display density and physical unit conversion.

const MM_PER_INCH: f32 = 25.4;
const POINTS_PER_INCH: f32 = 72.0;

/// Display metrics reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Vertical dots per inch.
    pub ydpi: f32,
    /// Scale from density-independent pixels to pixels.
    pub density: f32,
    /// Scale from scaled pixels (font sizes) to pixels.
    pub scaled_density: f32,
}

impl DisplayMetrics {
    /// Metrics for a display with the given vertical DPI and a 1.0 density.
    pub fn with_ydpi(ydpi: f32) -> Self {
        Self {
            ydpi,
            ..Self::default()
        }
    }

    /// Set the density scale used for `dp` and `sp` dimensions.
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self.scaled_density = density;
        self
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            ydpi: 160.0,
            density: 1.0,
            scaled_density: 1.0,
        }
    }
}

/// Units accepted for dimension values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionUnit {
    /// Raw pixels.
    Px,
    /// Density-independent pixels.
    Dp,
    /// Scaled pixels.
    Sp,
    /// Typographic points (1/72 inch).
    Pt,
    /// Inches.
    In,
    /// Millimeters.
    Mm,
}

impl DimensionUnit {
    /// Parse a unit suffix such as `dp` or `px`.
    pub fn parse(suffix: &str) -> Option<Self> {
        match suffix {
            "px" => Some(Self::Px),
            "dp" | "dip" => Some(Self::Dp),
            "sp" => Some(Self::Sp),
            "pt" => Some(Self::Pt),
            "in" => Some(Self::In),
            "mm" => Some(Self::Mm),
            _ => None,
        }
    }

    /// Convert a value in this unit into pixels.
    pub fn to_px(self, value: f32, metrics: &DisplayMetrics) -> f32 {
        match self {
            Self::Px => value,
            Self::Dp => value * metrics.density,
            Self::Sp => value * metrics.scaled_density,
            Self::Pt => value * metrics.ydpi / POINTS_PER_INCH,
            Self::In => value * metrics.ydpi,
            Self::Mm => value * metrics.ydpi / MM_PER_INCH,
        }
    }
}

/// Vertical pixel density used to convert offsets into inches.
///
/// The value is fixed for the lifetime of a ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayCalibration {
    px_per_inch_y: f32,
}

impl DisplayCalibration {
    /// Build a calibration from host metrics.
    ///
    /// The reported DPI is truncated to a whole number of pixels per inch.
    pub fn from_metrics(metrics: &DisplayMetrics) -> Self {
        Self {
            px_per_inch_y: metrics.ydpi.trunc(),
        }
    }

    /// Build a calibration with an exact pixels-per-inch value.
    pub const fn from_px_per_inch(px_per_inch_y: f32) -> Self {
        Self { px_per_inch_y }
    }

    /// Vertical pixels per inch.
    pub fn px_per_inch_y(&self) -> f32 {
        self.px_per_inch_y
    }

    /// Convert a vertical pixel offset into inches.
    pub fn px_to_inches(&self, px: f32) -> f32 {
        px / self.px_per_inch_y
    }
}

impl Default for DisplayCalibration {
    fn default() -> Self {
        Self::from_metrics(&DisplayMetrics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calibration_truncates_reported_dpi() {
        let calibration = DisplayCalibration::from_metrics(&DisplayMetrics::with_ydpi(403.4));
        assert_eq!(calibration.px_per_inch_y(), 403.0);
        let calibration = DisplayCalibration::from_metrics(&DisplayMetrics::with_ydpi(159.99));
        assert_eq!(calibration.px_per_inch_y(), 159.0);
    }

    #[test]
    fn pixel_inch_conversion() {
        let calibration = DisplayCalibration::from_px_per_inch(160.0);
        assert_eq!(calibration.px_to_inches(400.0), 2.5);
        assert_eq!(calibration.px_to_inches(40.0), 0.25);
    }

    #[test]
    fn units_scale_with_metrics() {
        let metrics = DisplayMetrics::with_ydpi(320.0).with_density(2.0);
        assert_eq!(DimensionUnit::Px.to_px(8.0, &metrics), 8.0);
        assert_eq!(DimensionUnit::Dp.to_px(16.0, &metrics), 32.0);
        assert_eq!(DimensionUnit::Sp.to_px(10.0, &metrics), 20.0);
        assert_eq!(DimensionUnit::In.to_px(1.0, &metrics), 320.0);
        assert_eq!(DimensionUnit::Pt.to_px(72.0, &metrics), 320.0);
        assert!((DimensionUnit::Mm.to_px(25.4, &metrics) - 320.0).abs() < 1e-3);
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(DimensionUnit::parse("dip"), Some(DimensionUnit::Dp));
        assert_eq!(DimensionUnit::parse("mm"), Some(DimensionUnit::Mm));
        assert_eq!(DimensionUnit::parse("em"), None);
    }
}
