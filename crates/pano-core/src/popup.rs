use crate::sync::Visibility;

/// What a popup trigger changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupChange {
    pub hide: Vec<usize>,
    pub show: Option<usize>,
}

impl PopupChange {
    pub fn is_empty(&self) -> bool {
        self.hide.is_empty() && self.show.is_none()
    }
}

/// Popups where at most one is open at a time.
#[derive(Clone, Debug, Default)]
pub struct PopupGroup {
    open: Vec<bool>,
}

impl PopupGroup {
    pub fn new(len: usize) -> Self {
        Self {
            open: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open.iter().position(|o| *o)
    }

    /// Toggle `index`: an open popup closes; a closed one opens and every other
    /// open popup closes.
    pub fn trigger(&mut self, index: usize) -> PopupChange {
        let mut change = PopupChange::default();
        if index >= self.open.len() {
            return change;
        }
        let was_open = self.open[index];
        for (i, open) in self.open.iter_mut().enumerate() {
            if *open && (i != index || was_open) {
                *open = false;
                change.hide.push(i);
            }
        }
        if !was_open {
            self.open[index] = true;
            change.show = Some(index);
        }
        change
    }

    /// Close everything that is open.
    pub fn close_all(&mut self) -> PopupChange {
        let mut change = PopupChange::default();
        for (i, open) in self.open.iter_mut().enumerate() {
            if *open {
                *open = false;
                change.hide.push(i);
            }
        }
        change
    }
}

/// Push a change out to the popup elements.
pub fn apply_popup_change<V: Visibility>(change: &PopupChange, elements: &mut [V]) {
    for &i in &change.hide {
        if let Some(el) = elements.get_mut(i) {
            el.hide();
        }
    }
    if let Some(i) = change.show {
        if let Some(el) = elements.get_mut(i) {
            el.show();
        }
    }
}
