//! Built-in pressure scenarios for running without a device.

use crate::sensor::{SensorId, SensorSnapshot};
use std::time::{Duration, Instant};

/// Heel strike through toe-off.
const WALKING: [SensorSnapshot; 8] = [
    SensorSnapshot::new(1800, 400, 200, 0),
    SensorSnapshot::new(1600, 800, 600, 200),
    SensorSnapshot::new(1200, 1200, 1000, 400),
    SensorSnapshot::new(800, 1000, 1600, 800),
    SensorSnapshot::new(400, 600, 1800, 1200),
    SensorSnapshot::new(200, 400, 1400, 1600),
    SensorSnapshot::new(100, 200, 800, 1800),
    SensorSnapshot::new(0, 100, 400, 1000),
];

/// Shorter, harder gait cycle.
const RUNNING: [SensorSnapshot; 6] = [
    SensorSnapshot::new(2000, 500, 300, 0),
    SensorSnapshot::new(1800, 1200, 800, 200),
    SensorSnapshot::new(1000, 1600, 1800, 1000),
    SensorSnapshot::new(400, 1200, 2000, 1800),
    SensorSnapshot::new(0, 600, 1400, 2000),
    SensorSnapshot::new(0, 200, 600, 1200),
];

const STANDING: SensorSnapshot = SensorSnapshot::new(1200, 800, 1000, 600);

/// A simulated loading pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Cycling walking gait.
    Walking,
    /// Static two-footed stance.
    Standing,
    /// Cycling running gait.
    Running,
    /// Every sensor at rest.
    Clear,
    /// Load a single sensor.
    Probe(SensorId),
}

impl Scenario {
    /// Status line shown while this scenario is active.
    pub fn status(self) -> String {
        match self {
            Scenario::Walking => "Simulating Walking Pattern...".to_string(),
            Scenario::Standing => "Simulating Standing Position...".to_string(),
            Scenario::Running => "Simulating Running Pattern...".to_string(),
            Scenario::Clear => "Heatmap Cleared - Ready for Testing".to_string(),
            Scenario::Probe(id) => format!("Testing {} sensor", id),
        }
    }

    /// Tick interval for cycling scenarios.
    pub fn interval(self) -> Option<Duration> {
        match self {
            Scenario::Walking => Some(Duration::from_millis(500)),
            Scenario::Running => Some(Duration::from_millis(300)),
            _ => None,
        }
    }

    /// Frames a cycling scenario steps through.
    fn frames(self) -> &'static [SensorSnapshot] {
        match self {
            Scenario::Walking => &WALKING,
            Scenario::Running => &RUNNING,
            _ => &[],
        }
    }

    /// The fixed snapshot of a non-cycling scenario.
    pub fn still(self) -> Option<SensorSnapshot> {
        match self {
            Scenario::Standing => Some(STANDING),
            Scenario::Clear => Some(SensorSnapshot::ZERO),
            Scenario::Probe(id) => Some(SensorSnapshot::ZERO.with(id, probe_reading(id))),
            Scenario::Walking | Scenario::Running => None,
        }
    }
}

fn probe_reading(id: SensorId) -> u32 {
    match id {
        SensorId::Heel => 1500,
        SensorId::Arch => 1200,
        SensorId::Ball => 1800,
        SensorId::Toe => 1000,
    }
}

#[derive(Debug)]
struct Ticker {
    scenario: Scenario,
    interval: Duration,
    step: usize,
    next_due: Instant,
}

/// Drives at most one cycling scenario at a time.
#[derive(Debug, Default)]
pub struct Simulator {
    ticker: Option<Ticker>,
}

impl Simulator {
    /// Create an idle simulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `scenario`, cancelling whatever was running.
    ///
    /// Still scenarios return their snapshot right away. Cycling ones return
    /// `None` and produce their first frame one interval later via [`poll`].
    ///
    /// [`poll`]: Simulator::poll
    pub fn start(&mut self, scenario: Scenario, now: Instant) -> Option<SensorSnapshot> {
        self.stop();
        tracing::info!(?scenario, "scenario started");

        match scenario.interval() {
            Some(interval) => {
                self.ticker = Some(Ticker {
                    scenario,
                    interval,
                    step: 0,
                    next_due: now + interval,
                });
                None
            }
            None => scenario.still(),
        }
    }

    /// Emit the next frame if one is due.
    pub fn poll(&mut self, now: Instant) -> Option<SensorSnapshot> {
        let ticker = self.ticker.as_mut()?;
        if now < ticker.next_due {
            return None;
        }

        let frames = ticker.scenario.frames();
        ticker.step = (ticker.step + 1) % frames.len();
        ticker.next_due += ticker.interval;
        if ticker.next_due <= now {
            // Fell behind (suspended terminal etc.); don't replay missed ticks
            ticker.next_due = now + ticker.interval;
        }
        Some(frames[ticker.step])
    }

    /// Cancel the running scenario, if any.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            tracing::debug!(scenario = ?ticker.scenario, "scenario cancelled");
        }
    }

    /// The cycling scenario currently running.
    pub fn active(&self) -> Option<Scenario> {
        self.ticker.as_ref().map(|t| t.scenario)
    }

    /// When the next frame is due.
    pub fn next_due(&self) -> Option<Instant> {
        self.ticker.as_ref().map(|t| t.next_due)
    }
}
