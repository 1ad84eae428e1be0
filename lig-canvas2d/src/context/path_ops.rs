//! Path construction for Canvas2dContext shapes.

use crate::geometry::{CornerRadius, RoundRectParams};

/// Build a closed rounded-rectangle path.
///
/// Negative width/height flip the rectangle around its origin. Radii are
/// clamped to be non-negative and scaled down uniformly when adjacent radii
/// would overlap.
pub(crate) fn round_rect_path(params: &RoundRectParams) -> Option<tiny_skia::Path> {
    // Handle negative dimensions by adjusting position
    let (x, width) = if params.width < 0.0 {
        (params.x + params.width, -params.width)
    } else {
        (params.x, params.width)
    };
    let (y, height) = if params.height < 0.0 {
        (params.y + params.height, -params.height)
    } else {
        (params.y, params.height)
    };

    let clamp = |r: CornerRadius| CornerRadius {
        x: r.x.max(0.0),
        y: r.y.max(0.0),
    };
    let [mut tl, mut tr, mut br, mut bl] = params.radii.map(clamp);

    // Scale radii uniformly if they exceed the rectangle dimensions
    let top = (tl.x + tr.x).max(1e-10);
    let bottom = (bl.x + br.x).max(1e-10);
    let left = (tl.y + bl.y).max(1e-10);
    let right = (tr.y + br.y).max(1e-10);
    let scale = (width / top)
        .min(width / bottom)
        .min(height / left)
        .min(height / right)
        .min(1.0);

    if scale < 1.0 {
        for r in [&mut tl, &mut tr, &mut br, &mut bl] {
            r.x *= scale;
            r.y *= scale;
        }
    }

    // Kappa for quarter-ellipse cubic Bezier approximation
    const K: f32 = 0.552_284_8;

    let mut pb = tiny_skia::PathBuilder::new();

    pb.move_to(x + tl.x, y);

    // Top edge
    pb.line_to(x + width - tr.x, y);

    // Top-right corner
    if tr.x > 0.0 || tr.y > 0.0 {
        pb.cubic_to(
            x + width - tr.x + tr.x * K,
            y,
            x + width,
            y + tr.y - tr.y * K,
            x + width,
            y + tr.y,
        );
    }

    // Right edge
    pb.line_to(x + width, y + height - br.y);

    // Bottom-right corner
    if br.x > 0.0 || br.y > 0.0 {
        pb.cubic_to(
            x + width,
            y + height - br.y + br.y * K,
            x + width - br.x + br.x * K,
            y + height,
            x + width - br.x,
            y + height,
        );
    }

    // Bottom edge
    pb.line_to(x + bl.x, y + height);

    // Bottom-left corner
    if bl.x > 0.0 || bl.y > 0.0 {
        pb.cubic_to(
            x + bl.x - bl.x * K,
            y + height,
            x,
            y + height - bl.y + bl.y * K,
            x,
            y + height - bl.y,
        );
    }

    // Left edge
    pb.line_to(x, y + tl.y);

    // Top-left corner
    if tl.x > 0.0 || tl.y > 0.0 {
        pb.cubic_to(x, y + tl.y - tl.y * K, x + tl.x - tl.x * K, y, x + tl.x, y);
    }

    pb.close();
    pb.finish()
}
