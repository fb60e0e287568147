//! Room planner: catalog access and host glue around the `layout` editor core.
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Furniture catalog HTTP client and stale-response guarding |
//! | [`config`] | Environment-driven configuration |
//! | [`plan_file`] | JSON file destination for saved room plans |
//! | [`report`] | Plain-text tables for the CLI |
//! | [`script`] | Replaying scripted editor sessions |

pub mod catalog;
pub mod config;
pub mod plan_file;
pub mod report;
pub mod script;
