use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<E> = Rc<dyn Fn(&E)>;

struct Slots<E> {
    next_id: u64,
    entries: Vec<(u64, Callback<E>)>,
}

/// Single-threaded event source with disposable registrations.
///
/// Callbacks run in registration order. They may subscribe, dispose or emit
/// again while being notified; a registration added during an emit is first
/// called on the next emit, and one disposed during an emit is not called
/// again, even later in the same emit.
pub struct Emitter<E> {
    slots: Rc<RefCell<Slots<E>>>,
}

impl<E: 'static> Emitter<E> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register `callback` until the returned handle is disposed or dropped.
    pub fn subscribe(&self, callback: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, Rc::new(callback)));
            id
        };

        let slots: Weak<RefCell<Slots<E>>> = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().entries.retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Notify every registered callback.
    pub fn emit(&self, event: &E) {
        let callbacks: Vec<(u64, Callback<E>)> = self
            .slots
            .borrow()
            .entries
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in callbacks {
            if !self.is_registered(id) {
                continue;
            }
            callback(event);
        }
    }

    fn is_registered(&self, id: u64) -> bool {
        self.slots.borrow().entries.iter().any(|(entry, _)| *entry == id)
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("observers", &self.slots.borrow().entries.len())
            .finish()
    }
}

/// Handle for one registration on an [`Emitter`].
///
/// Dropping the handle unregisters the callback.
#[must_use = "dropping a subscription unregisters its callback"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unregister now.
    pub fn dispose(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
