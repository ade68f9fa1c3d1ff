//! Color-changed observer registry.

use std::fmt;

use crate::color::Hsb;

/// Handle returned by registration, used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback = Box<dyn FnMut(Hsb)>;

/// Observers notified synchronously, in registration order.
#[derive(Default)]
pub(crate) struct ColorObservers {
    next_id: u64,
    entries: Vec<(ObserverId, Callback)>,
}

impl ColorObservers {
    pub(crate) fn register(&mut self, callback: impl FnMut(Hsb) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    pub(crate) fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, color: Hsb) {
        for (_, callback) in &mut self.entries {
            callback(color);
        }
    }
}

impl fmt::Debug for ColorObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorObservers")
            .field("count", &self.entries.len())
            .finish()
    }
}
