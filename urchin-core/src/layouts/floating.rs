use super::Placement;
use crate::models::Window;

/// No placement at all. Windows go back to their last floating geometry.
pub fn update(windows: &[&Window]) -> Vec<Placement> {
    windows
        .iter()
        .map(|w| {
            let xyhw = if w.floating {
                w.geometry
            } else {
                w.float_geometry
            };
            Placement::new(w.handle, xyhw, true)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::tests::window;
    use crate::models::Xyhw;

    #[test]
    fn tiled_windows_return_to_their_float_geometry() {
        let mut tiled = window(1, Xyhw::new(0, 0, 768, 800));
        tiled.float_geometry = Xyhw::new(40, 40, 300, 200);
        let mut floating = window(2, Xyhw::new(500, 10, 100, 100));
        floating.floating = true;
        floating.float_geometry = Xyhw::new(1, 1, 1, 1);
        let placements = update(&[&tiled, &floating]);
        assert_eq!(placements[0].xyhw, Xyhw::new(40, 40, 300, 200));
        assert_eq!(placements[1].xyhw, Xyhw::new(500, 10, 100, 100));
        assert!(placements.iter().all(|p| p.size_hints && p.placed.is_none()));
    }
}
