pub mod answer;
pub mod config;
pub mod error;
pub mod key;
pub mod report;

pub use answer::*;
pub use config::Config;
pub use error::*;
pub use key::*;
pub use report::*;
