use rand::Rng;

use super::{LayoutContext, Placement};
use crate::models::{Window, Xyhw};

/// Floating layout that finds a spot for windows that were never placed.
///
/// The work area is scanned in steps of a quarter of the window height and an eighth
/// of its width. The first spot where at most `tolerance` placed windows have a corner
/// inside a slightly shrunk copy of the window wins. If no spot qualifies the
/// tolerance is raised and the scan repeated.
pub fn update<R: Rng>(ctx: &LayoutContext, windows: &[&Window], rng: &mut R) -> Vec<Placement> {
    let area = ctx.work_area;
    let mut taken: Vec<Xyhw> = windows
        .iter()
        .filter(|w| w.placed)
        .map(|w| w.geometry)
        .collect();
    let mut placements = vec![];

    for w in windows.iter().filter(|w| !w.bastard && !w.placed) {
        let geo = w.geometry;
        let spot = if too_awkward(geo, ctx) {
            None
        } else {
            find_spot(geo, area, &taken)
        };
        let xyhw = match spot {
            Some((x, y)) => {
                let th = if w.has_title { ctx.title_height } else { 0 };
                let jitter_x = th * rng.random_range(0..3);
                let jitter_y = th + th * rng.random_range(0..3);
                Xyhw::new(x + jitter_x, y + jitter_y, geo.w, geo.h)
            }
            None => geo,
        };
        taken.push(xyhw);
        placements.push(Placement {
            placed: Some(true),
            ..Placement::new(w.handle, xyhw, true)
        });
    }
    placements
}

/// Windows that are not worth searching a spot for. They stay where they are.
/// Narrow or oversized windows are skipped too, so the grid steps are never zero and
/// the scan always ends.
fn too_awkward(geo: Xyhw, ctx: &LayoutContext) -> bool {
    let big = geo.w > ctx.screen.w / 2 && geo.h > ctx.screen.h / 2;
    big || geo.h < 4 || geo.w < 8 || geo.w > ctx.work_area.w || geo.h > ctx.work_area.h
}

fn find_spot(geo: Xyhw, area: Xyhw, taken: &[Xyhw]) -> Option<(i32, i32)> {
    let (step_x, step_y) = (geo.w / 8, geo.h / 4);
    let probe_w = (geo.w as f32 * 0.8) as i32;
    let probe_h = (geo.h as f32 * 0.8) as i32;
    for tolerance in 0..=taken.len() {
        let mut y = area.y;
        while y + geo.h <= area.bottom() {
            let mut x = area.x;
            while x + geo.w <= area.right() {
                let probe = Xyhw::new(x, y, probe_w, probe_h);
                if overlap_count(probe, taken) <= tolerance {
                    return Some((x, y));
                }
                x += step_x;
            }
            y += step_y;
        }
    }
    None
}

/// Number of taken rectangles with a corner inside `probe`.
fn overlap_count(probe: Xyhw, taken: &[Xyhw]) -> usize {
    taken
        .iter()
        .filter(|t| {
            t.outer_corners(0)
                .iter()
                .any(|(x, y)| probe.contains_point(*x, *y))
        })
        .count()
}
