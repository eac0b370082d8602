pub mod backend;
pub mod builder;
pub mod json;
pub mod level;
pub mod logger;
pub mod record;

#[cfg(feature = "tracing")]
pub mod tracing;

#[cfg(feature = "tracing")]
pub mod factory;

#[cfg(feature = "log")]
pub mod log;

pub mod env;
pub mod noop;

pub use crate::backend::Backend;
pub use crate::builder::EventBuilder;
pub use crate::level::Level;
pub use crate::logger::Logger;
pub use crate::record::FieldValue;

#[cfg(feature = "tracing")]
pub use crate::factory::get_logger;
