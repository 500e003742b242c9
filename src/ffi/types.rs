//! The #[repr(C)] structs that make up the exported surface. cbindgen turns
//! these into `libkafkaadmin_defs.h`; keep C naming so the header reads like
//! a native one.
//!
//! Pointer fields in result structs are owned by the library and released by
//! the matching `free_*` entry point. Pointer fields in request structs
//! (`key_value_t`, `new_topic_t`) are borrowed from the caller for the
//! duration of the call.

use std::ffi::{c_char, c_int};

/// One librdkafka configuration entry.
#[repr(C)]
pub struct key_value_t {
    pub key: *const c_char,
    pub value: *const c_char,
}

/// One broker node. `rack` is null when the broker reports none.
#[repr(C)]
pub struct node_t {
    pub id: c_int,
    pub host: *mut c_char,
    pub port: c_int,
    pub rack: *mut c_char,
}

#[repr(C)]
pub struct describe_cluster_result_t {
    pub num_nodes: c_int,
    pub nodes: *mut node_t,
    /// The broker that served the metadata request; null if it was not part
    /// of the reported node list.
    pub controller: *mut node_t,
    pub cluster_id: *mut c_char,
    /// Number of entries in `authorized_operations`; 0 with a null array
    /// when the cluster does not report authorized operations.
    pub num_authorized_operations: c_int,
    pub authorized_operations: *mut c_char,
}

/// Request to create one topic. Negative `num_partitions` or
/// `replication_factor` select the broker default.
#[repr(C)]
pub struct new_topic_t {
    pub name: *const c_char,
    pub num_partitions: c_int,
    pub replication_factor: i16,
}

#[repr(C)]
pub struct create_topic_result_t {
    pub topic: *mut c_char,
    /// Broker error for this topic; null on success.
    pub error: *mut c_char,
    /// Topic id as assigned by the broker. Always null for now: the
    /// underlying client does not surface topic ids.
    pub uuid: *mut c_char,
    pub num_partitions: c_int,
    pub replication_factor: c_int,
}

#[repr(C)]
pub struct create_topics_result_t {
    pub num_topics: c_int,
    pub topics: *mut create_topic_result_t,
}

#[repr(C)]
pub struct delete_topic_result_t {
    pub topic: *mut c_char,
    /// Broker error for this topic; null on success.
    pub error: *mut c_char,
}

#[repr(C)]
pub struct delete_topics_result_t {
    pub num_topics: c_int,
    pub topics: *mut delete_topic_result_t,
}
