use serde::{Deserialize, Serialize};

/// Size constraints a client asks for. A zero value means "unconstrained", which is
/// also what missing or malformed hints turn into.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeHints {
    pub base_w: i32,
    pub base_h: i32,
    pub inc_w: i32,
    pub inc_h: i32,
    pub min_w: i32,
    pub min_h: i32,
    pub max_w: i32,
    pub max_h: i32,
    /// Minimum aspect ratio as `(x, y)`.
    pub min_aspect: (i32, i32),
    /// Maximum aspect ratio as `(x, y)`.
    pub max_aspect: (i32, i32),
}

impl SizeHints {
    /// Replace negative values with zero so every later computation can treat the
    /// hints as trusted.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let pos = |v: i32| v.max(0);
        Self {
            base_w: pos(self.base_w),
            base_h: pos(self.base_h),
            inc_w: pos(self.inc_w),
            inc_h: pos(self.inc_h),
            min_w: pos(self.min_w),
            min_h: pos(self.min_h),
            max_w: pos(self.max_w),
            max_h: pos(self.max_h),
            min_aspect: (pos(self.min_aspect.0), pos(self.min_aspect.1)),
            max_aspect: (pos(self.max_aspect.0), pos(self.max_aspect.1)),
        }
    }

    /// A client is fixed when it can only ever have one size.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.max_w > 0 && self.max_h > 0 && self.max_w == self.min_w && self.max_h == self.min_h
    }

    const fn has_aspect(&self) -> bool {
        self.min_aspect.0 > 0
            && self.min_aspect.1 > 0
            && self.max_aspect.0 > 0
            && self.max_aspect.1 > 0
    }

    /// Constrain a frame size. `title` is the title height included in `h`; min and
    /// max heights refer to the client area below it.
    #[must_use]
    pub fn constrain(&self, w: i32, h: i32, title: i32) -> (i32, i32) {
        let mut w = w.max(1) - self.base_w;
        let mut h = h.max(1) - self.base_h;

        if self.has_aspect() {
            // client supplied ratios can be anywhere in i32
            let (min_x, min_y) = (i64::from(self.min_aspect.0), i64::from(self.min_aspect.1));
            let (max_x, max_y) = (i64::from(self.max_aspect.0), i64::from(self.max_aspect.1));
            let (w64, h64) = (i64::from(w), i64::from(h));
            if w64 * max_y > h64 * max_x {
                w = ((h64 * max_x / max_y) as i32).max(1);
            } else if w64 * min_y < h64 * min_x {
                h = ((w64 * min_y / min_x) as i32).max(1);
            }
        }

        if self.inc_w > 0 {
            w -= w % self.inc_w;
        }
        if self.inc_h > 0 {
            h -= h % self.inc_h;
        }

        w += self.base_w;
        h += self.base_h;

        if self.min_w > 0 && w < self.min_w {
            w = self.min_w;
        }
        if self.min_h > 0 && h - title < self.min_h {
            h = self.min_h + title;
        }
        if self.max_w > 0 && w > self.max_w {
            w = self.max_w;
        }
        if self.max_h > 0 && h - title > self.max_h {
            h = self.max_h + title;
        }
        (w, h)
    }
}
