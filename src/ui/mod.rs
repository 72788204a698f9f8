//! Progress reporting
//!
//! The pipeline reports what it is doing through the `Ui` trait:
//! - Current phase (Stadiums, Locations, Teams, ...)
//! - Per-entity info lines (only shown when verbose)
//! - Per-check result lines
//! - Advisory warnings that do not abort the run

use std::fmt;

/// Validation phases, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stadiums,
    Locations,
    Teams,
    Competitions,
    Memberships,
    Mechanics,
    Quotas,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Stadiums => write!(f, "Checking stadiums"),
            Phase::Locations => write!(f, "Checking locations"),
            Phase::Teams => write!(f, "Checking teams"),
            Phase::Competitions => write!(f, "Checking competitions"),
            Phase::Memberships => write!(f, "Checking team memberships"),
            Phase::Mechanics => write!(f, "Checking mechanics"),
            Phase::Quotas => write!(f, "Checking regional quotas"),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Trait for UI implementations - allows both console and silent/test modes
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn set_info(&mut self, info: impl Into<String>);
    fn log(&mut self, message: impl Into<String>);
    fn warn(&mut self, message: impl Into<String>);
}

/// Line-oriented UI writing to stdout
pub struct ConsoleUi {
    verbose: bool,
}

impl ConsoleUi {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Ui for ConsoleUi {
    fn set_phase(&mut self, phase: Phase) {
        if phase != Phase::Complete {
            println!("{}", phase);
        }
    }

    fn set_info(&mut self, info: impl Into<String>) {
        if self.verbose {
            println!("  {}", info.into());
        }
    }

    fn log(&mut self, message: impl Into<String>) {
        println!("  {}", message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        println!("  Warning: {}", message.into());
    }
}

/// Silent UI implementation for testing and non-interactive use
#[derive(Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}
    fn set_info(&mut self, _info: impl Into<String>) {}
    fn log(&mut self, _message: impl Into<String>) {}
    fn warn(&mut self, _message: impl Into<String>) {}
}

/// UI that records everything it is told, for assertions in tests
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub phases: Vec<Phase>,
    pub info: Vec<String>,
    pub logs: Vec<String>,
    pub warnings: Vec<String>,
}

impl Ui for RecordingUi {
    fn set_phase(&mut self, phase: Phase) {
        self.phases.push(phase);
    }

    fn set_info(&mut self, info: impl Into<String>) {
        self.info.push(info.into());
    }

    fn log(&mut self, message: impl Into<String>) {
        self.logs.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}
