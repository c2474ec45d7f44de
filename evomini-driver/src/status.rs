//! Driver status notifications.

/// Receives driver lifecycle notifications.
///
/// Stands in for a console status line: integrators can route the
/// callback to a logger, an LED, or nothing at all. The driver calls it
/// exactly once with the construction outcome and once more when the
/// transport is released.
pub trait StatusSink {
    fn ready_changed(&mut self, ready: bool);
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn ready_changed(&mut self, ready: bool) {
        (**self).ready_changed(ready)
    }
}

/// Discards every notification
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn ready_changed(&mut self, _ready: bool) {}
}
