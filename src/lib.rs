//! Capital Quest: state and region capitals for the US, India and the UK.
//!
//! The core is two pieces: [`capitals`] (static tables and tiered matching)
//! and [`enrich`] (fun facts plus cached Wikipedia summaries). The REST
//! [`server`], the interactive [`console`] and the `capital-quest` binary
//! are thin front-ends over them.

pub mod capitals;
pub mod config;
pub mod console;
pub mod enrich;
pub mod report;
pub mod server;
