use super::Xyhw;
use serde::{Deserialize, Serialize};

/// A physical output as reported by the display server.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub output: String,
    pub bbox: Xyhw,
}

impl Screen {
    #[must_use]
    pub fn new(bbox: Xyhw, output: &str) -> Self {
        Self {
            output: output.to_owned(),
            bbox,
        }
    }

    /// Two outputs showing the same region of the root window.
    #[must_use]
    pub const fn mirrors(&self, other: &Self) -> bool {
        self.bbox.x == other.bbox.x && self.bbox.y == other.bbox.y
    }
}

/// Drop every screen that mirrors one seen earlier in the list.
#[must_use]
pub fn dedup_mirrors(screens: Vec<Screen>) -> Vec<Screen> {
    let mut kept: Vec<Screen> = Vec::with_capacity(screens.len());
    for screen in screens {
        if kept.iter().any(|k| k.mirrors(&screen)) {
            tracing::debug!("Ignoring mirrored output {}", screen.output);
            continue;
        }
        kept.push(screen);
    }
    kept
}

/// Smallest rectangle holding every screen.
#[must_use]
pub fn bounding_box(screens: &[Screen]) -> Xyhw {
    let Some(first) = screens.first() else {
        return Xyhw::default();
    };
    let (mut x0, mut y0, mut x1, mut y1) = (
        first.bbox.x,
        first.bbox.y,
        first.bbox.right(),
        first.bbox.bottom(),
    );
    for s in screens {
        x0 = x0.min(s.bbox.x);
        y0 = y0.min(s.bbox.y);
        x1 = x1.max(s.bbox.right());
        y1 = y1.max(s.bbox.bottom());
    }
    Xyhw::new(x0, y0, x1 - x0, y1 - y0)
}
