//! Cell-rect carving helpers used while laying out a frame.

use super::geom::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Insets {
    pub const fn all(v: u16) -> Self {
        Self::xy(v, v)
    }

    pub const fn xy(x: u16, y: u16) -> Self {
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
        }
    }
}

impl Rect {
    pub fn inset(self, insets: Insets) -> Self {
        Rect::new(
            self.x.saturating_add(insets.left),
            self.y.saturating_add(insets.top),
            self.w
                .saturating_sub(insets.left.saturating_add(insets.right)),
            self.h
                .saturating_sub(insets.top.saturating_add(insets.bottom)),
        )
    }

    /// Overlap of two rects; empty (but positioned) when they are disjoint.
    pub fn intersect(self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// `(top, rest)`, the top one at most `h` rows tall.
    pub fn split_top(self, h: u16) -> (Rect, Rect) {
        let h = h.min(self.h);
        let top = Rect { h, ..self };
        let rest = Rect {
            y: self.y.saturating_add(h),
            h: self.h - h,
            ..self
        };
        (top, rest)
    }

    /// `(rest, bottom)`, the bottom one at most `h` rows tall.
    pub fn split_bottom(self, h: u16) -> (Rect, Rect) {
        let (rest, bottom) = self.split_top(self.h - h.min(self.h));
        (rest, bottom)
    }

    /// `(left, rest)`, the left one at most `w` columns wide.
    pub fn split_left(self, w: u16) -> (Rect, Rect) {
        let w = w.min(self.w);
        let left = Rect { w, ..self };
        let rest = Rect {
            x: self.x.saturating_add(w),
            w: self.w - w,
            ..self
        };
        (left, rest)
    }

    /// `count` equal columns separated by `gap` cells. The last column takes
    /// whatever integer division leaves over.
    pub fn split_columns(self, count: u16, gap: u16) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let usable = self.w.saturating_sub(gap.saturating_mul(count - 1));
        let col_w = usable / count;
        let stride = col_w.saturating_add(gap);
        (0..count)
            .map(|i| {
                let x = self.x.saturating_add(stride.saturating_mul(i));
                let w = if i + 1 == count {
                    self.right().saturating_sub(x)
                } else {
                    col_w
                };
                Rect { x, w, ..self }
            })
            .collect()
    }

    /// A `w` x `h` rect centred inside this one, shrunk to fit.
    pub fn centered(self, w: u16, h: u16) -> Rect {
        let w = w.min(self.w);
        let h = h.min(self.h);
        Rect::new(
            self.x.saturating_add((self.w - w) / 2),
            self.y.saturating_add((self.h - h) / 2),
            w,
            h,
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;
