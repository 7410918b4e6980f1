//! In-flight guards.

use std::sync::atomic::{AtomicBool, Ordering};

/// One kind of action that may be in flight at most once.
///
/// `idle → in-flight` happens in [`try_acquire`](Self::try_acquire); the
/// returned guard moves the slot back to idle when dropped, whether the
/// action succeeded, failed or was cancelled.
///
/// # Examples
///
/// ```
/// use lore_actions::Slot;
///
/// let slot = Slot::default();
/// let guard = slot.try_acquire().unwrap();
/// assert!(slot.try_acquire().is_none());
/// drop(guard);
/// assert!(!slot.is_in_flight());
/// ```
#[derive(Debug, Default)]
pub struct Slot {
    in_flight: AtomicBool,
}

impl Slot {
    /// Claim the slot, or `None` if it is already in flight.
    pub fn try_acquire(&self) -> Option<SlotGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SlotGuard { slot: self })
    }

    /// Whether an action currently holds the slot.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Releases its [`Slot`] on drop.
#[derive(Debug)]
pub struct SlotGuard<'a> {
    slot: &'a Slot,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        self.slot.in_flight.store(false, Ordering::Release);
    }
}
