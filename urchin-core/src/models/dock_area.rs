use serde::{Deserialize, Serialize};

use super::Xyhw;

/// Edge reservation a panel declares, measured from the edges of the whole root
/// area. Spans of zero mean the reservation covers the full edge.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DockArea {
    pub top: i32,
    pub top_start_x: i32,
    pub top_end_x: i32,

    pub bottom: i32,
    pub bottom_start_x: i32,
    pub bottom_end_x: i32,

    pub right: i32,
    pub right_start_y: i32,
    pub right_end_y: i32,

    pub left: i32,
    pub left_start_y: i32,
    pub left_end_y: i32,
}

impl From<&[i64]> for DockArea {
    fn from(slice: &[i64]) -> Self {
        let at = |i: usize| slice.get(i).map_or(0, |v| *v as i32);
        Self {
            left: at(0),
            right: at(1),
            top: at(2),
            bottom: at(3),
            left_start_y: at(4),
            left_end_y: at(5),
            right_start_y: at(6),
            right_end_y: at(7),
            top_start_x: at(8),
            top_end_x: at(9),
            bottom_start_x: at(10),
            bottom_end_x: at(11),
        }
    }
}

/// Per-edge insets of a single monitor.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Struts {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Struts {
    /// Keep the larger reservation of each edge. Panels on the same edge overlap
    /// rather than stack.
    pub fn merge_max(&mut self, other: Self) {
        self.left = self.left.max(other.left);
        self.right = self.right.max(other.right);
        self.top = self.top.max(other.top);
        self.bottom = self.bottom.max(other.bottom);
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
    }
}

const fn span_hits(start: i32, end: i32, lo: i32, len: i32) -> bool {
    (start == 0 && end == 0) || (lo <= start && start < lo + len)
}

impl DockArea {
    /// Insets this reservation imposes on `screen`, given the bounding box of all
    /// screens. Edges whose span lies outside the screen, or that do not reach past
    /// the gap between the screen and the root edge, contribute nothing.
    #[must_use]
    pub fn insets_for(&self, screen: &Xyhw, root: &Xyhw) -> Struts {
        let mut struts = Struts::default();
        if self.top > 0 && span_hits(self.top_start_x, self.top_end_x, screen.x, screen.w) {
            struts.top = (self.top - (screen.y - root.y)).clamp(0, screen.h);
        }
        if self.bottom > 0
            && span_hits(self.bottom_start_x, self.bottom_end_x, screen.x, screen.w)
        {
            struts.bottom = (self.bottom - (root.bottom() - screen.bottom())).clamp(0, screen.h);
        }
        if self.left > 0 && span_hits(self.left_start_y, self.left_end_y, screen.y, screen.h) {
            struts.left = (self.left - (screen.x - root.x)).clamp(0, screen.w);
        }
        if self.right > 0
            && span_hits(self.right_start_y, self.right_end_y, screen.y, screen.h)
        {
            struts.right = (self.right - (root.right() - screen.right())).clamp(0, screen.w);
        }
        struts
    }
}
