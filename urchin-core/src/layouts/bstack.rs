use super::{split_columns, LayoutContext, Placement};
use crate::models::{Window, Xyhw};

/// Master row across the top, the remaining windows side by side below it.
pub fn update(ctx: &LayoutContext, windows: &[&Window]) -> Vec<Placement> {
    let count = windows.len();
    if count == 0 {
        return vec![];
    }
    let area = ctx.work_area;
    let nmaster = ctx.tag.nmaster.clamp(1, count);
    let master_height = if count > nmaster {
        (area.h as f32 * ctx.tag.mwfact).floor() as i32
    } else {
        area.h
    };

    let master = Xyhw::new(area.x, area.y, area.w, master_height);
    let stack = Xyhw::new(area.x, area.y + master_height, area.w, area.h - master_height);
    let mut rects = split_columns(master, nmaster);
    rects.extend(split_columns(stack, count - nmaster));

    windows
        .iter()
        .zip(rects)
        .map(|(w, rect)| Placement::new(w.handle, rect.inset_border(w.border), false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::tests::{context, tag, window};
    use crate::layouts::Layout;

    #[test]
    fn a_single_window_gets_the_whole_work_area() {
        let tag = tag(Layout::BottomStack);
        let area = Xyhw::new(0, 0, 1280, 800);
        let ctx = context(&tag, area);
        let only = window(1, Xyhw::default());
        assert_eq!(update(&ctx, &[&only])[0].xyhw, area);
    }

    #[test]
    fn master_row_spans_the_work_width() {
        let tag = tag(Layout::BottomStack);
        let area = Xyhw::new(0, 0, 1280, 800);
        let ctx = context(&tag, area);
        let owned: Vec<Window> = (0..4).map(|i| window(i, Xyhw::default())).collect();
        let refs: Vec<&Window> = owned.iter().collect();
        let placements = update(&ctx, &refs);
        assert_eq!(placements[0].xyhw, Xyhw::new(0, 0, 1280, 480));
        let widths: i32 = placements[1..].iter().map(|p| p.xyhw.w).sum();
        assert_eq!(widths, area.w);
        assert_eq!(placements[3].xyhw, Xyhw::new(852, 480, 428, 320));
    }

    #[test]
    fn several_masters_share_the_row() {
        let mut tag = tag(Layout::BottomStack);
        tag.nmaster = 2;
        let ctx = context(&tag, Xyhw::new(0, 0, 1280, 800));
        let owned: Vec<Window> = (0..3).map(|i| window(i, Xyhw::default())).collect();
        let refs: Vec<&Window> = owned.iter().collect();
        let placements = update(&ctx, &refs);
        assert_eq!(placements[0].xyhw, Xyhw::new(0, 0, 640, 480));
        assert_eq!(placements[1].xyhw, Xyhw::new(640, 0, 640, 480));
        assert_eq!(placements[2].xyhw, Xyhw::new(0, 480, 1280, 320));
    }
}
