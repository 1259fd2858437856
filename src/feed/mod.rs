//! Inbound sensor events.
//!
//! Every producer (simulator ticks, key presses, the device feed) sends
//! [`SensorEvent`]s into one channel. The [`Dispatcher`] is the only consumer:
//! it turns each event into a complete snapshot, stores it and renders it,
//! strictly in arrival order.

mod reader;
mod simulator;

pub use reader::{parse_feed_line, spawn_file_feed};
pub use simulator::{Scenario, Simulator};

use crate::heatmap::{HeatmapRenderer, Surface};
use crate::sensor::{decode_payload, SensorId, SensorSnapshot};
use crate::state::SnapshotStore;
use std::sync::mpsc::{self, Receiver, Sender};

/// Something that changes what the insole reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorEvent {
    /// A complete set of readings.
    Snapshot(SensorSnapshot),
    /// A raw notification for one sensor, still undecoded.
    Notification {
        /// Sensor the notification came from.
        sensor: SensorId,
        /// Raw characteristic value.
        payload: Vec<u8>,
    },
}

/// Sending half of the event channel.
pub type EventSender = Sender<SensorEvent>;

/// Create the event channel.
pub fn channel() -> (EventSender, Dispatcher) {
    let (tx, rx) = mpsc::channel();
    (tx, Dispatcher { rx })
}

/// Consumes sensor events and renders each one.
#[derive(Debug)]
pub struct Dispatcher {
    rx: Receiver<SensorEvent>,
}

impl Dispatcher {
    /// Process every pending event. Returns the number of frames rendered.
    pub fn drain(
        &self,
        store: &mut SnapshotStore,
        renderer: &HeatmapRenderer,
        surface: &mut Surface,
    ) -> usize {
        let mut frames = 0;
        while let Ok(event) = self.rx.try_recv() {
            let next = resolve(event, store.current());
            store.update(next);
            renderer.render(&next, surface);
            frames += 1;
        }
        frames
    }
}

/// Build the snapshot that follows `current` once `event` is applied.
fn resolve(event: SensorEvent, current: SensorSnapshot) -> SensorSnapshot {
    match event {
        SensorEvent::Snapshot(snapshot) => snapshot,
        SensorEvent::Notification { sensor, payload } => match decode_payload(&payload) {
            Ok(value) => {
                tracing::debug!(%sensor, value, "notification");
                current.with(sensor, value)
            }
            Err(e) => {
                tracing::warn!(%sensor, "{}; keeping last reading {}", e, current.get(sensor));
                current
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness() -> (EventSender, Dispatcher, SnapshotStore, HeatmapRenderer, Surface) {
        let (tx, dispatcher) = channel();
        let mut surface = Surface::new(0, 0);
        surface.set_display_size(60, 120);
        (tx, dispatcher, SnapshotStore::new(), HeatmapRenderer::default(), surface)
    }

    #[test]
    fn test_drain_renders_each_event_in_order() {
        let (tx, dispatcher, mut store, renderer, mut surface) = harness();
        tx.send(SensorEvent::Snapshot(SensorSnapshot::new(1800, 400, 200, 0))).unwrap();
        tx.send(SensorEvent::Snapshot(SensorSnapshot::new(0, 100, 400, 1000))).unwrap();

        assert_eq!(dispatcher.drain(&mut store, &renderer, &mut surface), 2);
        assert_eq!(store.current(), SensorSnapshot::new(0, 100, 400, 1000));
        assert_eq!(store.revision(), 2);
        assert_eq!((surface.width(), surface.height()), (60, 120));

        assert_eq!(dispatcher.drain(&mut store, &renderer, &mut surface), 0);
    }

    #[test]
    fn test_notification_replaces_one_sensor() {
        let (tx, dispatcher, mut store, renderer, mut surface) = harness();
        store.update(SensorSnapshot::new(10, 20, 30, 40));
        tx.send(SensorEvent::Notification {
            sensor: SensorId::Ball,
            payload: b"1500".to_vec(),
        })
        .unwrap();

        dispatcher.drain(&mut store, &renderer, &mut surface);
        assert_eq!(store.current(), SensorSnapshot::new(10, 20, 1500, 40));
    }

    #[test]
    fn test_bad_notification_keeps_last_reading() {
        let (tx, dispatcher, mut store, renderer, mut surface) = harness();
        store.update(SensorSnapshot::new(10, 20, 30, 40));
        tx.send(SensorEvent::Notification {
            sensor: SensorId::Toe,
            payload: vec![0x01],
        })
        .unwrap();

        assert_eq!(dispatcher.drain(&mut store, &renderer, &mut surface), 1);
        assert_eq!(store.current(), SensorSnapshot::new(10, 20, 30, 40));
    }

    #[test]
    fn test_drain_survives_dropped_sender() {
        let (tx, dispatcher, mut store, renderer, mut surface) = harness();
        tx.send(SensorEvent::Snapshot(SensorSnapshot::new(5, 5, 5, 5))).unwrap();
        drop(tx);
        assert_eq!(dispatcher.drain(&mut store, &renderer, &mut surface), 1);
        assert_eq!(dispatcher.drain(&mut store, &renderer, &mut surface), 0);
    }
}
