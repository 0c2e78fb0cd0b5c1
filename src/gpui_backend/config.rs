use crate::geom::Padding;

/// Configuration for the GPUI ruler view.
#[derive(Debug, Clone, Default)]
pub struct RulerViewConfig {
    /// Padding around the ruler content.
    ///
    /// The top padding feeds the tick spacing and the readout position; all
    /// sides contribute to the minimum view size.
    pub padding: Padding,
}
