use super::{split_rows, LayoutContext, Placement};
use crate::models::{Window, Xyhw};

/// Master column on the left holding the first `nmaster` windows, the rest stacked
/// in a column on the right.
pub fn update(ctx: &LayoutContext, windows: &[&Window]) -> Vec<Placement> {
    let count = windows.len();
    if count == 0 {
        return vec![];
    }
    let area = ctx.work_area;
    let nmaster = ctx.tag.nmaster.clamp(1, count);
    let master_width = if count > nmaster {
        (area.w as f32 * ctx.tag.mwfact).floor() as i32
    } else {
        area.w
    };

    let master = Xyhw::new(area.x, area.y, master_width, area.h);
    let stack = Xyhw::new(area.x + master_width, area.y, area.w - master_width, area.h);
    let mut rects = split_rows(master, nmaster);
    rects.extend(split_rows(stack, count - nmaster));

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

    fn windows(count: u64) -> Vec<Window> {
        (0..count).map(|i| window(i, Xyhw::default())).collect()
    }

    #[test]
    fn two_windows_split_at_the_master_ratio() {
        let tag = tag(Layout::Tile);
        let ctx = context(&tag, Xyhw::new(0, 0, 1280, 800));
        let owned = windows(2);
        let refs: Vec<&Window> = owned.iter().collect();
        let rects: Vec<Xyhw> = update(&ctx, &refs).iter().map(|p| p.xyhw).collect();
        assert_eq!(
            rects,
            vec![Xyhw::new(0, 0, 768, 800), Xyhw::new(768, 0, 512, 800)]
        );
    }

    #[test]
    fn a_single_window_gets_the_whole_work_area() {
        let tag = tag(Layout::Tile);
        let area = Xyhw::new(0, 30, 1280, 770);
        let ctx = context(&tag, area);
        let owned = windows(1);
        let placements = update(&ctx, &[&owned[0]]);
        assert_eq!(placements[0].xyhw, area);
        assert!(!placements[0].size_hints);
    }

    #[test]
    fn columns_add_up_to_the_work_height() {
        let mut tag = tag(Layout::Tile);
        tag.nmaster = 2;
        let area = Xyhw::new(0, 0, 1000, 799);
        let ctx = context(&tag, area);
        let owned = windows(5);
        let refs: Vec<&Window> = owned.iter().collect();
        let placements = update(&ctx, &refs);
        let master: i32 = placements[..2].iter().map(|p| p.xyhw.h).sum();
        let stack: i32 = placements[2..].iter().map(|p| p.xyhw.h).sum();
        assert_eq!(master, area.h);
        assert_eq!(stack, area.h);
        assert!(placements[..2].iter().all(|p| p.xyhw.w == 600));
        assert!(placements[2..].iter().all(|p| p.xyhw.x == 600 && p.xyhw.w == 400));
    }

    #[test]
    fn fewer_windows_than_nmaster_use_the_full_width() {
        let mut tag = tag(Layout::Tile);
        tag.nmaster = 3;
        let ctx = context(&tag, Xyhw::new(0, 0, 1280, 800));
        let owned = windows(2);
        let refs: Vec<&Window> = owned.iter().collect();
        let placements = update(&ctx, &refs);
        assert!(placements.iter().all(|p| p.xyhw.w == 1280));
        assert_eq!(placements[1].xyhw, Xyhw::new(0, 400, 1280, 400));
    }

    #[test]
    fn borders_are_taken_out_of_the_cell() {
        let tag = tag(Layout::Tile);
        let ctx = context(&tag, Xyhw::new(0, 0, 1280, 800));
        let mut owned = windows(2);
        owned.iter_mut().for_each(|w| w.border = 1);
        let refs: Vec<&Window> = owned.iter().collect();
        let placements = update(&ctx, &refs);
        assert_eq!(placements[0].xyhw, Xyhw::new(0, 0, 766, 798));
        assert_eq!(placements[1].xyhw, Xyhw::new(768, 0, 510, 798));
    }
}
