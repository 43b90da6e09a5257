pub mod app;
pub mod commands;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod env;
pub mod inspect;
pub mod output;
pub mod perform;
pub mod runtime;
pub mod source;

pub use app::run;
pub use config::{cmd_config, ConfigArgs};
pub use inspect::{cmd_inspect, InspectArgs};
pub use perform::{cmd_perform, PerformArgs};
