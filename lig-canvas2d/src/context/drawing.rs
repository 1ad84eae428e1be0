//! Fill operations and paint helpers for Canvas2dContext.

use super::Canvas2dContext;
use crate::geometry::{RectParams, RoundRectParams};
use tiny_skia::Transform;

impl Canvas2dContext {
    /// Build a paint for the current fill style and run `f` with it.
    pub(crate) fn with_fill_paint<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self, &tiny_skia::Paint<'static>),
    {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(self.state.fill_style);
        f(self, &paint);
    }

    /// Fill a rectangle with the current fill style.
    pub fn fill_rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", params.x, params.y, params.width, params.height);
        let Some(rect) =
            tiny_skia::Rect::from_xywh(params.x, params.y, params.width, params.height)
        else {
            return;
        };
        self.with_fill_paint(|ctx, paint| {
            ctx.pixmap
                .fill_rect(rect, paint, Transform::identity(), None);
        });
    }

    /// Fill a rounded rectangle with the current fill style.
    pub fn fill_round_rect(&mut self, params: &RoundRectParams) {
        log::debug!(target: "canvas", "fillRoundRect {} {} {} {}", params.x, params.y, params.width, params.height);
        if let Some(path) = super::path_ops::round_rect_path(params) {
            self.fill_path(&path);
        }
    }

    /// Fill an arbitrary path with the current fill style (non-zero winding).
    pub(crate) fn fill_path(&mut self, path: &tiny_skia::Path) {
        self.with_fill_paint(|ctx, paint| {
            ctx.pixmap.fill_path(
                path,
                paint,
                tiny_skia::FillRule::Winding,
                Transform::identity(),
                None,
            );
        });
    }
}
