mod appointment;
mod contact;
mod schedule;
mod service;
mod settings;
mod slot;
mod stats;

pub(crate) mod wire;

pub use appointment::*;
pub use contact::*;
pub use schedule::*;
pub use service::*;
pub use settings::*;
pub use slot::*;
pub use stats::*;
