//! Plantar - a terminal plantar-pressure heatmap viewer.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plantar::app::App;
use plantar::feed::{spawn_file_feed, Scenario};
use plantar::heatmap::{color_for, HeatmapRenderer};
use plantar::sensor::{SensorId, SensorLayout, SensorPosition};
use plantar::{ui, PlantarError};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "plantar")]
#[command(about = "A terminal plantar-pressure heatmap viewer", long_about = None)]
struct Args {
    /// Scenario to start with
    #[arg(long, value_enum)]
    scenario: Option<ScenarioArg>,

    /// Move a sensor, e.g. `toe=62,20` (percent of width, height); repeatable
    #[arg(long = "position", value_name = "SENSOR=X,Y", value_parser = parse_position)]
    positions: Vec<(SensorId, SensorPosition)>,

    /// Read `<sensor> <payload>` notification lines from this file or FIFO
    #[arg(long)]
    feed: Option<PathBuf>,

    /// Render a single frame without a terminal UI and print its geometry (diagnostic)
    #[arg(long)]
    once: bool,

    /// Frame width for --once
    #[arg(long, default_value_t = 300)]
    width: usize,

    /// Frame height for --once
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Walking,
    Standing,
    Running,
    Clear,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Walking => Scenario::Walking,
            ScenarioArg::Standing => Scenario::Standing,
            ScenarioArg::Running => Scenario::Running,
            ScenarioArg::Clear => Scenario::Clear,
        }
    }
}

fn parse_position(spec: &str) -> std::result::Result<(SensorId, SensorPosition), PlantarError> {
    SensorLayout::parse_override(spec)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Plantar");
    }

    let renderer = HeatmapRenderer::new(SensorLayout::with_overrides(args.positions.iter().copied()));
    let mut app = App::new(renderer);

    if args.once {
        run_once(&mut app, &args)?;
    } else {
        run_tui(app, &args)?;
    }

    if args.log.is_some() {
        tracing::info!("Plantar exited");
    }

    Ok(())
}

/// Render one frame headless and print the render geometry.
///
/// This is a diagnostic for scripting and tests, not a pressure readout:
/// the interactive view shows readings only as labels on the heatmap.
fn run_once(app: &mut App, args: &Args) -> Result<()> {
    app.resize_view(args.width, args.height);

    let now = Instant::now();
    if let Some(scenario) = args.scenario.map(Scenario::from) {
        app.start_scenario(scenario, now);
        // Cycling scenarios show their first frame one interval in
        let at = now + scenario.interval().unwrap_or_default();
        app.tick(at);
    }

    if let Some(path) = &args.feed {
        let handle = spawn_file_feed(path, app.events())?;
        handle
            .join()
            .map_err(|_| anyhow!("feed reader panicked"))?;
        app.tick(now);
    }

    let snapshot = app.snapshot();
    let (width, height) = (app.surface.width(), app.surface.height());
    println!("frame {}x{} revision {}", width, height, app.store.revision());
    for (sensor, reading) in snapshot.iter() {
        let geom = app.renderer.sensor_geometry(sensor, reading, width, height);
        let (cx, cy) = geom.center;
        let ramp = color_for(geom.pressure);
        println!(
            "{:<5} reading={:<5} pressure={:.2} radius={:.1} center=({:.0},{:.0}) ramp=rgba({},{},{},{:.2})",
            sensor.name(),
            reading,
            geom.pressure,
            geom.max_radius,
            cx,
            cy,
            ramp.r,
            ramp.g,
            ramp.b,
            ramp.a
        );
    }
    Ok(())
}

fn run_tui(mut app: App, args: &Args) -> Result<()> {
    if let Some(path) = &args.feed {
        // Detached: the reader ends on its own at EOF or once the app is gone
        spawn_file_feed(path, app.events())?;
    }
    if let Some(scenario) = args.scenario {
        app.start_scenario(scenario.into(), Instant::now());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let now = Instant::now();
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Probe one sensor
                    (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='4')) => {
                        let idx = c as usize - '1' as usize;
                        app.start_scenario(Scenario::Probe(SensorId::ALL[idx]), now);
                    }

                    // Scenarios
                    (KeyModifiers::NONE, KeyCode::Char('w')) => {
                        app.start_scenario(Scenario::Walking, now);
                    }
                    (KeyModifiers::NONE, KeyCode::Char('s')) => {
                        app.start_scenario(Scenario::Standing, now);
                    }
                    (KeyModifiers::NONE, KeyCode::Char('r')) => {
                        app.start_scenario(Scenario::Running, now);
                    }
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.start_scenario(Scenario::Clear, now);
                    }

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T'))
                    | (KeyModifiers::NONE, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    }

                    _ => {}
                }
            }
        }
    }
}
