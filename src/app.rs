//! Application state and logic.

use std::time::{Duration, Instant};

use crate::feed::{self, Dispatcher, EventSender, Scenario, SensorEvent, Simulator};
use crate::heatmap::{HeatmapRenderer, Surface};
use crate::sensor::SensorSnapshot;
use crate::state::SnapshotStore;
use crate::util::LayoutConfig;

/// Longest the event loop waits for input before checking the feed again.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Current sensor readings.
    pub store: SnapshotStore,
    /// Heatmap renderer with the active sensor layout.
    pub renderer: HeatmapRenderer,
    /// Rendered heatmap frame.
    pub surface: Surface,
    /// Built-in scenario driver.
    pub simulator: Simulator,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// View layout settings.
    pub layout: LayoutConfig,
    events: EventSender,
    dispatcher: Dispatcher,
}

impl App {
    /// Create a new application instance.
    pub fn new(renderer: HeatmapRenderer) -> Self {
        let (events, dispatcher) = feed::channel();
        Self {
            store: SnapshotStore::new(),
            renderer,
            surface: Surface::new(0, 0),
            simulator: Simulator::new(),
            status: "Ready - press w/s/r to simulate".to_string(),
            theme: Theme::GruvboxDark,
            layout: LayoutConfig::default(),
            events,
            dispatcher,
        }
    }

    /// A sender for external producers such as the device feed.
    pub fn events(&self) -> EventSender {
        self.events.clone()
    }

    /// Current readings.
    pub fn snapshot(&self) -> SensorSnapshot {
        self.store.current()
    }

    /// Switch simulator scenario.
    pub fn start_scenario(&mut self, scenario: Scenario, now: Instant) {
        if let Some(snapshot) = self.simulator.start(scenario, now) {
            self.submit(snapshot);
        }
        self.status = scenario.status();
    }

    /// Advance the simulator and render whatever events are pending.
    /// Returns the number of frames rendered.
    pub fn tick(&mut self, now: Instant) -> usize {
        if let Some(snapshot) = self.simulator.poll(now) {
            self.submit(snapshot);
        }
        self.dispatcher
            .drain(&mut self.store, &self.renderer, &mut self.surface)
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.simulator
            .next_due()
            .map(|due| due.saturating_duration_since(now).min(IDLE_POLL))
            .unwrap_or(IDLE_POLL)
    }

    /// Match the surface to a new view size, re-rendering when it changed.
    pub fn resize_view(&mut self, width: usize, height: usize) {
        if self.surface.display_size() == (width, height)
            && (self.surface.width(), self.surface.height()) == (width, height)
        {
            return;
        }
        tracing::debug!(width, height, "view resized");
        self.surface.set_display_size(width, height);
        self.renderer.render(&self.store.current(), &mut self.surface);
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    fn submit(&mut self, snapshot: SensorSnapshot) {
        // The receiver lives in `self`, so the channel cannot be closed here
        if self.events.send(SensorEvent::Snapshot(snapshot)).is_err() {
            tracing::error!("event channel closed");
        }
    }
}
