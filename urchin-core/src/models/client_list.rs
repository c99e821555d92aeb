use std::collections::HashMap;

use super::{Window, WindowHandle, WindowType};

/// Owns every managed window. Windows are stored by handle; two ordered lists keep
/// the registry order (newest first) and the focus order (most recent first).
#[derive(Debug, Clone, Default)]
pub struct ClientList {
    windows: HashMap<WindowHandle, Window>,
    order: Vec<WindowHandle>,
    stack: Vec<WindowHandle>,
}

impl ClientList {
    /// Register a window at the head of the list. Desktop windows go to the bottom
    /// of the focus stack, everything else to the top.
    pub fn insert(&mut self, window: Window) {
        let handle = window.handle;
        if self.windows.contains_key(&handle) {
            return;
        }
        self.order.insert(0, handle);
        if window.r#type == WindowType::Desktop {
            self.stack.push(handle);
        } else {
            self.stack.insert(0, handle);
        }
        self.windows.insert(handle, window);
    }

    pub fn remove(&mut self, handle: WindowHandle) -> Option<Window> {
        let window = self.windows.remove(&handle)?;
        self.order.retain(|h| *h != handle);
        self.stack.retain(|h| *h != handle);
        Some(window)
    }

    #[must_use]
    pub fn get(&self, handle: WindowHandle) -> Option<&Window> {
        self.windows.get(&handle)
    }

    pub fn get_mut(&mut self, handle: WindowHandle) -> Option<&mut Window> {
        self.windows.get_mut(&handle)
    }

    #[must_use]
    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.windows.contains_key(&handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Handles in registry order.
    #[must_use]
    pub fn handles(&self) -> &[WindowHandle] {
        &self.order
    }

    /// Handles in focus order.
    #[must_use]
    pub fn stack(&self) -> &[WindowHandle] {
        &self.stack
    }

    /// Windows in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.order.iter().filter_map(|h| self.windows.get(h))
    }

    /// Windows in focus order.
    pub fn iter_stack(&self) -> impl Iterator<Item = &Window> {
        self.stack.iter().filter_map(|h| self.windows.get(h))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Window> {
        self.windows.values_mut()
    }

    /// Move a window to the top of the focus stack.
    pub fn promote(&mut self, handle: WindowHandle) {
        if let Some(index) = self.stack.iter().position(|h| *h == handle) {
            let h = self.stack.remove(index);
            self.stack.insert(0, h);
        }
    }

    /// Move a window to the head of the registry list.
    pub fn move_to_head(&mut self, handle: WindowHandle) {
        if let Some(index) = self.order.iter().position(|h| *h == handle) {
            let h = self.order.remove(index);
            self.order.insert(0, h);
        }
    }
}
