//! homewatch: console front end for the Homewatch security core.
//!
//! Each invocation loads the file-backed store, runs one coordinator
//! operation, and prints the resulting state. A console observer echoes the
//! notifications a resident UI would receive.
//!
//! ## Subcommands
//!
//! - `status`: Show alarm status, arming status, and the sensor set
//! - `arm` / `disarm`: Change the arming status
//! - `add-sensor` / `remove-sensor` / `set-sensor`: Manage sensors
//! - `scan`: Process a simulated camera frame through the fake analyzer

mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use homewatch_core::{
    load_monitor_config, AlarmStatus, ArmingStatus, CameraImage, FakeImageAnalyzer,
    ImageAnalyzer, SecurityCoordinator, SecurityError, SecurityStore, Sensor, SensorType,
    StatusObserver,
};

#[derive(Parser)]
#[command(name = "homewatch")]
#[command(about = "Home security monitoring console")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ArmMode {
    Home,
    Away,
}

impl From<ArmMode> for ArmingStatus {
    fn from(mode: ArmMode) -> Self {
        match mode {
            ArmMode::Home => ArmingStatus::ArmedHome,
            ArmMode::Away => ArmingStatus::ArmedAway,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SensorKind {
    Door,
    Window,
    Motion,
}

impl From<SensorKind> for SensorType {
    fn from(kind: SensorKind) -> Self {
        match kind {
            SensorKind::Door => SensorType::Door,
            SensorKind::Window => SensorType::Window,
            SensorKind::Motion => SensorType::Motion,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current alarm status, arming status, and sensors
    Status,

    /// Arm the system (resets all sensors to inactive)
    Arm {
        #[arg(value_enum)]
        mode: ArmMode,
    },

    /// Disarm the system (stands the alarm down)
    Disarm,

    /// Add a sensor to the managed set
    AddSensor {
        name: String,
        #[arg(value_enum)]
        kind: SensorKind,
    },

    /// Remove a sensor from the managed set
    RemoveSensor {
        name: String,
        #[arg(value_enum)]
        kind: SensorKind,
    },

    /// Report a sensor going active (or inactive with --off)
    SetSensor {
        name: String,
        #[arg(value_enum)]
        kind: SensorKind,
        /// Report the sensor going inactive instead
        #[arg(long)]
        off: bool,
    },

    /// Process a simulated camera frame
    Scan {
        /// Pin the fake analyzer to "cat present"
        #[arg(long, conflicts_with = "no_cat")]
        cat: bool,
        /// Pin the fake analyzer to "no cat"
        #[arg(long)]
        no_cat: bool,
    },
}

/// Echoes coordinator notifications to the console.
struct ConsoleObserver;

impl StatusObserver for ConsoleObserver {
    fn on_alarm_status_changed(&self, status: AlarmStatus) {
        println!("[alarm] {}", status.description());
    }

    fn on_cat_detected(&self, present: bool) {
        if present {
            println!("[camera] cat detected");
        } else {
            println!("[camera] no cat in frame");
        }
    }

    fn on_sensor_set_changed(&self) {
        println!("[sensors] sensor set changed");
    }
}

fn main() {
    let _logging_guard = logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        tracing::error!(error = %e, "homewatch command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), SecurityError> {
    let store_path = homewatch_core::get_store_path().ok_or(SecurityError::HomeDirNotFound)?;
    let store = SecurityStore::load(&store_path)?;
    let config = load_monitor_config();

    let analyzer: Box<dyn ImageAnalyzer> = match &command {
        Commands::Scan { cat: true, .. } => Box::new(FakeImageAnalyzer::always(true)),
        Commands::Scan { no_cat: true, .. } => Box::new(FakeImageAnalyzer::always(false)),
        _ => Box::new(FakeImageAnalyzer::new()),
    };

    let mut coordinator = SecurityCoordinator::with_confidence_threshold(
        store,
        analyzer,
        config.cat_confidence_threshold,
    );
    coordinator.add_status_listener(Box::new(ConsoleObserver));

    match command {
        Commands::Status => {}
        Commands::Arm { mode } => coordinator.set_arming_status(mode.into()),
        Commands::Disarm => coordinator.set_arming_status(ArmingStatus::Disarmed),
        Commands::AddSensor { name, kind } => {
            coordinator.add_sensor(Sensor::new(name, kind.into()));
        }
        Commands::RemoveSensor { name, kind } => {
            coordinator.remove_sensor(&name, kind.into());
        }
        Commands::SetSensor { name, kind, off } => {
            let sensor = Sensor::new(name, kind.into());
            coordinator.change_sensor_activation_status(&sensor, !off);
        }
        Commands::Scan { .. } => {
            coordinator.process_image(&CameraImage::blank(640, 480));
        }
    }

    print_status(&coordinator);
    Ok(())
}

fn print_status(coordinator: &SecurityCoordinator<SecurityStore, Box<dyn ImageAnalyzer>>) {
    println!(
        "system: {} | alarm: {}",
        coordinator.arming_status().description(),
        coordinator.alarm_status().description()
    );
    let sensors = coordinator.sensors();
    if sensors.is_empty() {
        println!("sensors: none");
        return;
    }
    for sensor in sensors {
        let state = if sensor.active { "ACTIVE" } else { "quiet" };
        println!("  {:<8} {:<24} {}", sensor.kind.to_string(), sensor.name, state);
    }
}
