//! Two-phase event buffer between host callbacks and the frame loop.
//!
//! Host callbacks only ever append to the write side. The frame loop is
//! the sole consumer: at the top of each frame it swaps the pending events
//! out and applies them to [`InputDevices`]. Callbacks never touch device
//! state directly, so a frame never observes a half-applied event even on
//! a multi-threaded host.

use crate::devices::InputDevices;
use crate::input::InputEvent;
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable producer handle; every clone feeds the same frame loop.
#[derive(Debug, Clone, Default)]
pub struct EventBuffer {
    pending: Arc<Mutex<Vec<InputEvent>>>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next frame.
    pub fn push(&self, event: InputEvent) {
        self.lock().push(event);
    }

    /// Number of events waiting for the next frame.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take every pending event, oldest first.
    pub fn take(&self) -> Vec<InputEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// Apply every pending event to `devices`. Returns how many were applied.
    pub fn drain_into(&self, devices: &mut InputDevices) -> usize {
        let events = self.take();
        for event in &events {
            devices.handle(event);
        }
        events.len()
    }

    // A push never leaves the Vec half-written, so a poisoned queue is still valid.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<InputEvent>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clones_share_one_queue() {
        let buffer = EventBuffer::new();
        let producer = buffer.clone();
        producer.push(InputEvent::Wheel { delta_y: 1.0 });
        producer.push(InputEvent::PointerLeave);
        assert_eq!(buffer.len(), 2);
        assert_eq!(
            buffer.take(),
            vec![InputEvent::Wheel { delta_y: 1.0 }, InputEvent::PointerLeave]
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn drain_applies_in_arrival_order() {
        let buffer = EventBuffer::new();
        buffer.push(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        buffer.push(InputEvent::PointerUp { x: 1.0, y: 1.0 });

        let mut devices = InputDevices::new();
        assert_eq!(buffer.drain_into(&mut devices), 2);
        // Down then up: the click is visible, the hold is over.
        assert!(devices.mouse.is_pressed());
        assert!(!devices.mouse.is_held());
        assert!(buffer.is_empty());
    }

    #[test]
    fn producers_on_other_threads() {
        let buffer = EventBuffer::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let producer = buffer.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        producer.push(InputEvent::Wheel { delta_y: 1.0 });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut devices = InputDevices::new();
        assert_eq!(buffer.drain_into(&mut devices), 100);
        assert_eq!(devices.wheel.delta(), 100.0);
    }
}
