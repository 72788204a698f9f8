pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod parser;
pub mod report;
pub mod schema;
pub mod source;
pub mod ui;
pub mod verify;

pub use cli::{Cli, Commands};
pub use config::VerifyConfig;
pub use error::{EntityKind, EntityRef, ValidationError};
pub use report::Report;
pub use source::{DataSource, FsSource, MemorySource};
pub use ui::{ConsoleUi, Phase, SilentUi, Ui};
pub use verify::{check_dataset, load_dataset, verify, Dataset};
