//! libkafkaadmin - a C-callable Kafka admin client.
//!
//! The crate builds as a `cdylib` whose exported surface is described by a
//! generated header (`libkafkaadmin_defs.h`, emitted by `build.rs`). A host
//! process loads the shared library, configures a client from key/value
//! pairs, and drives admin operations through opaque handles. Every pointer
//! handed out by the library stays owned by it and must be returned through
//! the matching `free_*` function.
#![allow(non_camel_case_types)]

use once_cell::sync::OnceCell;

pub mod admin;
pub mod config;
pub mod error;
pub mod ffi;
mod handles;

pub use admin::{AdminService, BrokerNode, ClusterInfo, CreatedTopic, DeletedTopic, NewTopicSpec};
pub use config::AdminConfig;
pub use error::{AdminError, Result};

// Re-export the extern "C" functions and #[repr(C)] types so they appear in
// the cdylib and cbindgen discovers them from the crate root.
pub use ffi::*;

/// Shared runtime driving the async admin futures. Created lazily on the
/// first exported call and kept for the lifetime of the process.
pub static RUNTIME: OnceCell<tokio::runtime::Runtime> = OnceCell::new();

pub(crate) fn runtime() -> &'static tokio::runtime::Runtime {
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("kafkaadmin")
            .enable_all()
            .build()
            .expect("runtime")
    })
}
