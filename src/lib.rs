pub mod aggregate;
pub mod api;
pub mod column;
pub mod config;
pub mod consts;
pub mod error;
pub mod layout;
pub mod loader;
pub mod reconcile;
pub mod report;
pub mod tally;

pub use aggregate::{aggregate, Grid, Summary};
pub use error::{TallyError, TallyResult};
pub use tally::{RespondentKey, Tally};
// cmd is a binary module (main.rs); everything it needs is exported here.
