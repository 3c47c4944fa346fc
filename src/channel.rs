//! Hand-off points between the control loop and outside contexts.
//!
//! [`Channel`] is a bounded FIFO for commands; [`Signal`] keeps only the
//! latest value and is used for presence updates, where older readings are
//! worthless once a newer one exists. Both are built on `critical-section`
//! so producers may run in another task or an interrupt, while the control
//! loop only drains them between ticks.

use core::cell::{Cell, RefCell};

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Bounded multi-producer FIFO.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Queue a value, handing it back if the channel is full
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .borrow_mut()
                .push_back(value)
                .map_err(TrySendError)
        })
    }

    /// Take the oldest queued value
    pub fn try_receive(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`Channel`]
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

/// Consumer handle for a [`Channel`]
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Option<T> {
        self.channel.try_receive()
    }

    /// Iterate until the channel is empty
    pub fn drain(&self) -> impl Iterator<Item = T> + '_ {
        core::iter::from_fn(|| self.channel.try_receive())
    }
}

/// Latest-value slot; a new value overwrites an unread one
pub struct Signal<T: Copy> {
    value: Mutex<Cell<Option<T>>>,
}

impl<T: Copy> Signal<T> {
    pub const fn new() -> Self {
        Self {
            value: Mutex::new(Cell::new(None)),
        }
    }

    pub fn signal(&self, value: T) {
        critical_section::with(|cs| self.value.borrow(cs).set(Some(value)));
    }

    /// Take the pending value, leaving the slot empty
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.value.borrow(cs).take())
    }

    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.value.borrow(cs).get().is_some())
    }
}

impl<T: Copy> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}
