//! # climate-api
//!
//! A read-only JSON API over a historical station climate dataset.
//!
//! The dataset is a SQLite file holding two tables, `station` and
//! `measurement`, produced elsewhere and never modified here. The library
//! exposes the dataset accessor and the axum router so the same code backs
//! the server binary, the inspection tool and the tests.
//!
//! ## Architecture
//!
//! - **Dataset Layer**: pooled, read-only SQLite queries ([`dataset`])
//! - **API Layer**: one handler per route, JSON out ([`handlers`])
//!
//! The "last year of data" window is always measured back from the latest
//! date stored in the dataset, so answers do not depend on when the
//! service is queried.

pub mod config;
pub mod dataset;
pub mod dates;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod schema;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::Config;
pub use dataset::{Dataset, DatasetSummary, Station, StationActivity, TemperatureStats};
pub use error::{ClimateError, Result};
pub use handlers::create_router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_dataset_stats, log_error,
    log_request_error,
};
pub use state::AppState;
