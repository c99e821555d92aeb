use super::DockArea;
use super::SizeHints;
use super::Window;
use super::WindowHandle;
use serde::{Deserialize, Serialize};

type MaybeName = Option<String>;

/// Property changes of a managed window. `None` fields did not change.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct WindowChange {
    pub handle: WindowHandle,
    pub transient: Option<Option<WindowHandle>>,
    pub name: Option<MaybeName>,
    pub hints: Option<SizeHints>,
    pub focusable: Option<bool>,
    pub strut: Option<Option<DockArea>>,
}

impl WindowChange {
    #[must_use]
    pub fn new(handle: WindowHandle) -> Self {
        Self {
            handle,
            ..Self::default()
        }
    }

    /// Apply the change. Returns `true` if anything was different.
    pub fn update(self, window: &mut Window) -> bool {
        let mut changed = false;
        if let Some(trans) = self.transient {
            changed = changed || window.transient != trans;
            window.transient = trans;
        }
        if let Some(name) = self.name {
            changed = changed || window.name != name;
            window.name = name;
        }
        if let Some(hints) = self.hints {
            let hints = hints.sanitized();
            changed = changed || window.hints != hints;
            window.hints = hints;
            if !window.bastard {
                window.fixed = window.r#type.is_fixed_by_default() || hints.is_fixed();
            }
        }
        if let Some(focusable) = self.focusable {
            let focusable = focusable && !window.bastard;
            changed = changed || window.focusable != focusable;
            window.focusable = focusable;
        }
        if let Some(strut) = self.strut {
            changed = changed || window.strut != strut;
            window.strut = strut;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_values_are_not_a_change() {
        let mut window = Window::new(WindowHandle(1), Some("a".to_owned()));
        let change = WindowChange {
            name: Some(Some("a".to_owned())),
            ..WindowChange::new(WindowHandle(1))
        };
        assert!(!change.update(&mut window));
    }

    #[test]
    fn hints_rederive_fixed() {
        let mut window = Window::new(WindowHandle(1), None);
        let hints = SizeHints {
            min_w: 50,
            min_h: 50,
            max_w: 50,
            max_h: 50,
            ..SizeHints::default()
        };
        let change = WindowChange {
            hints: Some(hints),
            ..WindowChange::new(WindowHandle(1))
        };
        assert!(change.update(&mut window));
        assert!(window.fixed);
    }

    #[test]
    fn bastards_never_become_focusable() {
        let mut window = Window::new(WindowHandle(1), None);
        window.bastard = true;
        window.focusable = false;
        let change = WindowChange {
            focusable: Some(true),
            ..WindowChange::new(WindowHandle(1))
        };
        assert!(!change.update(&mut window));
        assert!(!window.focusable);
    }
}
