#![allow(clippy::wildcard_imports)]

use super::*;
use crate::config::{MAX_MWFACT, MIN_MWFACT};
use crate::event_loop::ExitReason;
use crate::layouts::Layout;
use crate::models::{MonitorId, StrutMode, Tag};
use crate::state::State;

impl State {
    /// Processes a command and invokes the associated function. Commands act on the
    /// active monitor.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        tracing::debug!("Command: {:?}", command);
        process_internal(self, command).unwrap_or(false)
    }
}

fn process_internal(state: &mut State, command: &Command) -> Option<bool> {
    let monitor = state.active_monitor();
    match command {
        Command::SetLayout(symbol) => set_layout(state, monitor, symbol.as_deref()),
        Command::SetMasterRatio(arg) => set_master_ratio(state, monitor, arg.as_deref()),
        Command::IncMasterCount(delta) => inc_master_count(state, monitor, *delta),
        Command::MoveResize { dx, dy, dw, dh } => {
            move_resize(state, monitor, Xyhw::new(*dx, *dy, *dw, *dh))
        }
        Command::ToggleFloating => toggle_floating(state, monitor),
        Command::ToggleMaximize => toggle_maximize(state, monitor),

        Command::ToggleTag(tag) => {
            let handle = state.focus_manager.window?;
            Some(state.toggle_tag(handle, *tag))
        }
        Command::Tag(tag) => {
            let handle = state.focus_manager.window?;
            Some(state.tag_window(handle, *tag))
        }
        Command::View(Some(tag)) => Some(state.view(monitor, *tag)),
        Command::View(None) => Some(state.view_all(monitor)),
        Command::ToggleView(tag) => Some(state.toggle_view(monitor, *tag)),
        Command::FocusView(tag) => Some(state.focus_view(monitor, *tag)),
        Command::ViewPrevious => Some(state.view_previous(monitor)),
        Command::CycleView(direction) => Some(state.cycle_view(monitor, *direction)),

        Command::FocusNext => {
            state.focus_next();
            Some(true)
        }
        Command::FocusPrevious => {
            state.focus_previous();
            Some(true)
        }
        Command::FocusNextMonitor => focus_next_monitor(state),
        Command::Zoom => zoom(state, monitor),
        Command::Iconify => iconify(state, monitor),
        Command::KillClient => {
            let handle = state.focus_manager.window?;
            state.actions.push_back(DisplayAction::KillWindow(handle));
            Some(true)
        }
        Command::ToggleStruts => toggle_struts(state, monitor),

        Command::Quit => {
            state.exit = Some(ExitReason::Quit);
            Some(true)
        }
        Command::Restart => {
            state.exit = Some(ExitReason::Restart);
            Some(true)
        }
    }
}

/// Select a layout by symbol, or the next one.
fn set_layout(state: &mut State, monitor: MonitorId, symbol: Option<&str>) -> Option<bool> {
    let curtag = state.monitors.get(monitor)?.curtag;
    let tag = state.tags.get_mut(curtag)?;
    tag.layout = match symbol {
        None => tag.layout.next(),
        Some(symbol) => match symbol.parse::<Layout>() {
            Ok(layout) => layout,
            Err(err) => {
                tracing::warn!("{}", err);
                return None;
            }
        },
    };
    state.arrange(Some(monitor));
    Some(true)
}

fn set_master_ratio(state: &mut State, monitor: MonitorId, arg: Option<&str>) -> Option<bool> {
    let curtag = state.monitors.get(monitor)?.curtag;
    let tag = state.tags.get_mut(curtag)?;
    if !tag.layout.has_master_area() {
        return None;
    }
    let mwfact = match arg.map(str::trim) {
        None => tag.defaults.mwfact,
        Some(arg) => {
            let Ok(value) = arg.parse::<f32>() else {
                tracing::warn!("Not a master ratio: {}", arg);
                return None;
            };
            if arg.starts_with('+') || arg.starts_with('-') {
                tag.mwfact + value
            } else {
                value
            }
        }
    };
    if !mwfact.is_finite() {
        return None;
    }
    tag.mwfact = mwfact.clamp(MIN_MWFACT, MAX_MWFACT);
    state.arrange(Some(monitor));
    Some(true)
}

fn inc_master_count(state: &mut State, monitor: MonitorId, delta: Option<i32>) -> Option<bool> {
    let m = state.monitors.get(monitor)?;
    let (curtag, height) = (m.curtag, m.work_area().h);
    let border = state.border_width;
    let tag = state.tags.get_mut(curtag)?;
    if !tag.layout.has_master_area() {
        return None;
    }
    let nmaster = match delta {
        None => tag.defaults.nmaster,
        Some(delta) => {
            let wanted = tag.nmaster as i32 + delta;
            if !Tag::fits_masters(wanted, height, border) {
                tracing::debug!("Refusing {} master clients", wanted);
                return None;
            }
            wanted as usize
        }
    };
    tag.nmaster = nmaster;
    state.arrange(Some(monitor));
    Some(true)
}

/// Keyboard move and resize of a floating window. Size steps are at least one size
/// increment.
fn move_resize(state: &mut State, monitor: MonitorId, delta: Xyhw) -> Option<bool> {
    let handle = state.focus_manager.window?;
    let layout_floating = state.layout_is_floating(monitor);
    let window = state.clients.get(handle)?;
    if !(window.floating || layout_floating) {
        return None;
    }
    let step = |d: i32, inc: i32| {
        if d != 0 && d.abs() < inc {
            d.signum() * inc
        } else {
            d
        }
    };
    let dw = step(delta.w, window.hints.inc_w);
    let dh = step(delta.h, window.hints.inc_h);
    let g = window.geometry;
    let frame = Xyhw::new(g.x + delta.x, g.y + delta.y, g.w + dw, g.h + dh);
    let owner = state.owner_of(window);
    state.resize_window(handle, owner, frame, true);
    Some(true)
}

fn toggle_floating(state: &mut State, monitor: MonitorId) -> Option<bool> {
    if state.layout_is_floating(monitor) {
        return None;
    }
    let handle = state.focus_manager.window?;
    let window = state.clients.get_mut(handle)?;
    if window.bastard {
        return None;
    }
    window.floating = !window.floating;
    if window.floating {
        let restore = window.float_geometry;
        state.resize_window(handle, monitor, restore, false);
    } else {
        window.float_geometry = window.geometry;
    }
    state.actions.push_back(DisplayAction::Redraw(handle));
    state.arrange(Some(monitor));
    Some(true)
}

fn toggle_maximize(state: &mut State, monitor: MonitorId) -> Option<bool> {
    let handle = state.focus_manager.window?;
    let window = state.clients.get_mut(handle)?;
    if window.fixed {
        return None;
    }
    if window.maximized {
        window.maximized = false;
        let revert = window.revert.take()?;
        state.resize_window(handle, monitor, revert, true);
    } else {
        state.maximize(handle, monitor);
    }
    state.restack(monitor);
    Some(true)
}

/// Move the focused tiled window to the head of the list, which makes it the master.
/// When it already is, the next tiled window takes its place.
fn zoom(state: &mut State, monitor: MonitorId) -> Option<bool> {
    if state.layout_is_floating(monitor) {
        return None;
    }
    let focused = state.focused()?;
    if focused.floating {
        return None;
    }
    let focused = focused.handle;
    let tiled: Vec<WindowHandle> = state
        .clients
        .iter()
        .filter(|w| w.is_tiled() && state.is_visible(w, Some(monitor)))
        .map(|w| w.handle)
        .take(2)
        .collect();
    let target = match tiled.as_slice() {
        [first, second] if *first == focused => *second,
        [first, ..] if *first != focused => focused,
        _ => return None,
    };
    state.clients.move_to_head(target);
    state.arrange(Some(monitor));
    state.focus(Some(target));
    Some(true)
}

fn iconify(state: &mut State, monitor: MonitorId) -> Option<bool> {
    let handle = state.focus_manager.window?;
    state.focus_next();
    state.ban(handle);
    if let Some(w) = state.clients.get_mut(handle) {
        w.iconified = true;
    }
    state.arrange(Some(monitor));
    if state.focus_manager.window == Some(handle) {
        state.focus(None);
    }
    Some(true)
}

fn focus_next_monitor(state: &mut State) -> Option<bool> {
    let count = state.monitors.len();
    if count < 2 {
        return None;
    }
    let next = (state.active_monitor() + 1) % count;
    let center = state.monitors[next].work_area().center();
    state.focus_manager.monitor = next;
    state.focus_manager.selscreen = true;
    state
        .actions
        .push_back(DisplayAction::MoveMouseOverPoint(center));
    state.focus(None);
    Some(true)
}

/// Show or hide the struts of the current tag. Monitors sharing the tag follow.
fn toggle_struts(state: &mut State, monitor: MonitorId) -> Option<bool> {
    let curtag = state.monitors.get(monitor)?.curtag;
    let hidden = if state.hide_bastards {
        StrutMode::Hide
    } else {
        StrutMode::Off
    };
    let tag = state.tags.get_mut(curtag)?;
    tag.strut_mode = match tag.strut_mode {
        StrutMode::On => hidden,
        StrutMode::Off | StrutMode::Hide => StrutMode::On,
    };
    let sharing: Vec<MonitorId> = state
        .monitors
        .iter()
        .enumerate()
        .filter(|(_, m)| m.curtag == curtag)
        .map(|(id, _)| id)
        .collect();
    for id in sharing {
        state.update_geometry(id);
    }
    state.arrange(None);
    Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Screen, SizeHints};

    fn single_screen() -> State {
        State::new_test(vec![Screen::new(Xyhw::new(0, 0, 1280, 800), "A")])
    }

    fn current_tag(state: &State) -> &Tag {
        state.tags.get(state.monitors[0].curtag).unwrap()
    }

    fn geometry(state: &State, id: u64) -> Xyhw {
        state.clients.get(WindowHandle(id)).unwrap().geometry
    }

    #[test]
    fn set_layout_cycles_and_ignores_unknown_symbols() {
        let mut state = single_screen();
        assert_eq!(current_tag(&state).layout, Layout::Tile);
        assert!(state.command_handler(&Command::SetLayout(None)));
        assert_eq!(current_tag(&state).layout, Layout::Monocle);
        assert!(state.command_handler(&Command::SetLayout(Some("b".to_owned()))));
        assert_eq!(current_tag(&state).layout, Layout::BottomStack);
        assert!(!state.command_handler(&Command::SetLayout(Some("?".to_owned()))));
        assert_eq!(current_tag(&state).layout, Layout::BottomStack);
    }

    #[test]
    fn master_ratio_adjusts_sets_resets_and_clamps() {
        let mut state = single_screen();
        state.command_handler(&Command::SetMasterRatio(Some("+0.1".to_owned())));
        assert!((current_tag(&state).mwfact - 0.7).abs() < 1e-5);
        state.command_handler(&Command::SetMasterRatio(Some("0.3".to_owned())));
        assert!((current_tag(&state).mwfact - 0.3).abs() < 1e-5);
        state.command_handler(&Command::SetMasterRatio(Some("-5".to_owned())));
        assert!((current_tag(&state).mwfact - MIN_MWFACT).abs() < 1e-5);
        state.command_handler(&Command::SetMasterRatio(None));
        assert!((current_tag(&state).mwfact - 0.6).abs() < 1e-5);
        assert!(!state.command_handler(&Command::SetMasterRatio(Some("wide".to_owned()))));
    }

    #[test]
    fn master_ratio_needs_a_master_area() {
        let mut state = single_screen();
        state.command_handler(&Command::SetLayout(Some("m".to_owned())));
        assert!(!state.command_handler(&Command::SetMasterRatio(Some("0.3".to_owned()))));
    }

    #[test]
    fn master_count_refuses_zero_and_tiny_masters() {
        let mut state = single_screen();
        state.border_width = 100;
        assert!(!state.command_handler(&Command::IncMasterCount(Some(-1))));
        assert!(state.command_handler(&Command::IncMasterCount(Some(2))));
        assert_eq!(current_tag(&state).nmaster, 3);
        // 800 / 4 = 200 is no taller than two borders
        assert!(!state.command_handler(&Command::IncMasterCount(Some(1))));
        state.command_handler(&Command::IncMasterCount(None));
        assert_eq!(current_tag(&state).nmaster, 1);
    }

    #[test]
    fn toggling_floating_twice_restores_the_tiled_geometry() {
        let mut state = single_screen();
        state.add_test_window(1, Xyhw::new(0, 0, 100, 100));
        state.add_test_window(2, Xyhw::new(0, 0, 100, 100));
        let before = geometry(&state, 2);
        state.command_handler(&Command::ToggleFloating);
        assert!(state.clients.get(WindowHandle(2)).unwrap().floating);
        assert_eq!(geometry(&state, 1), Xyhw::new(0, 0, 1280, 800));
        state.command_handler(&Command::ToggleFloating);
        assert_eq!(geometry(&state, 2), before);
    }

    #[test]
    fn toggle_maximize_covers_the_screen_and_comes_back() {
        let mut state = single_screen();
        state.command_handler(&Command::SetLayout(Some("f".to_owned())));
        state.add_test_window(1, Xyhw::new(10, 10, 100, 100));
        state.command_handler(&Command::ToggleMaximize);
        assert_eq!(geometry(&state, 1), Xyhw::new(0, 0, 1280, 800));
        state.command_handler(&Command::ToggleMaximize);
        assert_eq!(geometry(&state, 1), Xyhw::new(10, 10, 100, 100));
        assert!(!state.clients.get(WindowHandle(1)).unwrap().maximized);
    }

    #[test]
    fn zoom_swaps_the_master() {
        let mut state = single_screen();
        state.add_test_window(1, Xyhw::new(0, 0, 100, 100));
        state.add_test_window(2, Xyhw::new(0, 0, 100, 100));
        // 2 is the master and focused: zooming promotes 1
        assert!(state.command_handler(&Command::Zoom));
        assert_eq!(state.clients.handles()[0], WindowHandle(1));
        assert_eq!(geometry(&state, 1), Xyhw::new(0, 0, 768, 800));
        assert_eq!(state.focus_manager.window, Some(WindowHandle(1)));
    }

    #[test]
    fn iconify_hides_and_moves_focus_on() {
        let mut state = single_screen();
        state.add_test_window(1, Xyhw::new(0, 0, 100, 100));
        state.add_test_window(2, Xyhw::new(0, 0, 100, 100));
        assert!(state.command_handler(&Command::Iconify));
        let w = state.clients.get(WindowHandle(2)).unwrap();
        assert!(w.iconified && w.banned);
        assert_eq!(state.focus_manager.window, Some(WindowHandle(1)));
        assert_eq!(geometry(&state, 1), Xyhw::new(0, 0, 1280, 800));

        state.command_handler(&Command::Iconify);
        assert_eq!(state.focus_manager.window, None);
    }

    #[test]
    fn keyboard_resize_steps_by_the_size_increment() {
        let mut state = single_screen();
        state.command_handler(&Command::SetLayout(Some("f".to_owned())));
        let handle = state.add_test_window(1, Xyhw::new(10, 10, 100, 100));
        if let Some(w) = state.clients.get_mut(handle) {
            w.hints = SizeHints {
                inc_w: 10,
                inc_h: 10,
                ..SizeHints::default()
            };
        }
        state.command_handler(&Command::MoveResize {
            dx: 5,
            dy: 0,
            dw: 1,
            dh: 0,
        });
        assert_eq!(geometry(&state, 1), Xyhw::new(15, 10, 110, 100));
    }

    #[test]
    fn kill_and_quit() {
        let mut state = single_screen();
        assert!(!state.command_handler(&Command::KillClient));
        let handle = state.add_test_window(1, Xyhw::new(0, 0, 100, 100));
        state.command_handler(&Command::KillClient);
        assert_eq!(
            state.actions.back(),
            Some(&DisplayAction::KillWindow(handle))
        );
        state.command_handler(&Command::Restart);
        assert_eq!(state.exit, Some(ExitReason::Restart));
    }

    #[test]
    fn focus_next_monitor_warps_the_pointer() {
        let mut state = State::new_test(vec![
            Screen::new(Xyhw::new(0, 0, 1280, 800), "A"),
            Screen::new(Xyhw::new(1280, 0, 1280, 800), "B"),
        ]);
        assert!(state.command_handler(&Command::FocusNextMonitor));
        assert_eq!(state.active_monitor(), 1);
        assert!(state
            .actions
            .contains(&DisplayAction::MoveMouseOverPoint((1920, 400))));
        state.command_handler(&Command::FocusNextMonitor);
        assert_eq!(state.active_monitor(), 0);
    }

    #[test]
    fn struts_toggle_off_without_hiding_panels() {
        let mut state = single_screen();
        assert!(state.command_handler(&Command::ToggleStruts));
        assert_eq!(current_tag(&state).strut_mode, StrutMode::Off);
        state.command_handler(&Command::ToggleStruts);
        assert_eq!(current_tag(&state).strut_mode, StrutMode::On);
    }
}
