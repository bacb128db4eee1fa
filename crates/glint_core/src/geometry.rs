//! Viewport intersection geometry
//!
//! The visibility primitive reports how much of an element's bounding box
//! lies inside the viewport. Hosts with a native intersection facility can
//! feed ratios straight into the watcher; hosts that only know element and
//! viewport rects derive them with [`intersection_ratio`].

/// Axis-aligned rectangle in page coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Overlap of two rectangles, or a zero-area rect when disjoint
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect {
            x,
            y,
            width: (right - x).max(0.0),
            height: (bottom - y).max(0.0),
        }
    }

    /// Expand the bottom edge downward by `amount` pixels
    ///
    /// Mirrors a bottom-only root margin: elements start counting as
    /// visible while they are still `amount` pixels below the fold.
    pub fn expand_below(&self, amount: f32) -> Rect {
        Rect {
            height: self.height + amount,
            ..*self
        }
    }
}

/// Fraction of `target` inside `viewport` expanded downward by `margin_below`
///
/// Returns a value in `[0.0, 1.0]`. A zero-area target that sits inside the
/// expanded viewport counts as fully visible (ratio 1.0), matching how
/// intersection primitives treat degenerate boxes.
pub fn intersection_ratio(target: &Rect, viewport: &Rect, margin_below: f32) -> f32 {
    let expanded = viewport.expand_below(margin_below);
    let overlap = target.intersection(&expanded);
    let target_area = target.area();
    if target_area <= f32::EPSILON {
        // Degenerate boxes have no measurable overlap; they count as fully
        // visible only when the whole box sits inside the expanded viewport.
        let inside = target.x >= expanded.x
            && target.y >= expanded.y
            && target.right() <= expanded.right()
            && target.bottom() <= expanded.bottom();
        return if inside { 1.0 } else { 0.0 };
    }
    (overlap.area() / target_area).clamp(0.0, 1.0)
}
