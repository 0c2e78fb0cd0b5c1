//! Size negotiation.

use crate::geom::Padding;

/// Intrinsic width of the ruler content.
pub const DESIRED_WIDTH: f32 = 200.0;
/// Intrinsic height of the ruler content.
pub const DESIRED_HEIGHT: f32 = 200.0;

/// Final view size for the given padding and layout constraints.
///
/// Each axis takes the larger of the padded intrinsic size and the size the
/// constraint offers.
pub fn measure(padding: Padding, width_constraint: f32, height_constraint: f32) -> (f32, f32) {
    let min_width = padding.horizontal() + DESIRED_WIDTH;
    let min_height = padding.vertical() + DESIRED_HEIGHT;
    (
        min_width.max(width_constraint),
        min_height.max(height_constraint),
    )
}
