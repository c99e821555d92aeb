use super::{LayoutContext, Placement};
use crate::models::{StrutMode, Window, Xyhw};

/// Every tiled window fills the work area. Floating windows stay where they are.
pub fn update(ctx: &LayoutContext, windows: &[&Window]) -> Vec<Placement> {
    let area = ctx.work_area;
    windows
        .iter()
        .filter(|w| !w.bastard)
        .map(|w| {
            let xyhw = if w.floating {
                w.geometry
            } else if ctx.tag.strut_mode == StrutMode::On {
                area.inset_border(w.border)
            } else {
                // push the border off screen
                Xyhw::new(area.x - w.border, area.y - w.border, area.w, area.h)
            };
            Placement {
                placed: Some(false),
                ..Placement::new(w.handle, xyhw, false)
            }
        })
        .collect()
}
