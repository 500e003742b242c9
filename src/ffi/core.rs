//! Exported C entry points.
//!
//! Every function validates its pointers before touching them, logs failures
//! through `tracing`, and reports errors as null/false rather than unwinding
//! across the boundary. Handles minted by `create_admin_client` are opaque
//! registry ids, so stale or garbage values fail lookup instead of crashing.

use std::ffi::{c_char, c_int, c_void};
use std::sync::Once;

use tracing::{error, info};

use crate::admin::{AdminService, BrokerNode, NewTopicSpec};
use crate::config::AdminConfig;
use crate::ffi::scaffold::{
    boxed_array, cstr_arg, free_boxed_array, free_c_string, opt_c_string, to_c_string,
};
use crate::ffi::types::*;
use crate::handles;
use crate::runtime;

static TRACING_INIT: Once = Once::new();

fn init_logging() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter =
            EnvFilter::try_from_env("KAFKAADMIN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
        let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false);

        // The host process may already have a subscriber installed; losing
        // that race just routes our logs wherever the host sends its own.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init();
    });
}

// ---------- FFI: lifecycle ----------

/// One-time global setup: logging and the background runtime. Safe to call
/// repeatedly; every call after the first is a no-op returning true.
/// `create_admin_client` performs the same setup implicitly.
#[unsafe(no_mangle)]
pub extern "C" fn kafka_admin_init() -> bool {
    init_logging();
    runtime();
    true
}

#[unsafe(no_mangle)]
pub extern "C" fn create_admin_client(
    num_entries: c_int,
    entries: *const key_value_t,
) -> *mut c_void {
    init_logging();

    let mut config = AdminConfig::new();
    if num_entries > 0 {
        if entries.is_null() {
            error!("create_admin_client: entries is null");
            return std::ptr::null_mut();
        }
        for i in 0..num_entries as usize {
            let entry = unsafe { &*entries.add(i) };
            let (Some(key), Some(value)) =
                (unsafe { cstr_arg(entry.key) }, unsafe { cstr_arg(entry.value) })
            else {
                error!("create_admin_client: config entry {i} is null or not valid UTF-8");
                return std::ptr::null_mut();
            };
            config.set(key, value);
        }
    }

    match AdminService::new(&config) {
        Ok(service) => {
            let id = handles::register(service);
            info!(handle = id, "admin client created");
            id as *mut c_void
        }
        Err(e) => {
            error!("error creating admin client: {e}");
            std::ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn delete_admin_client(client: *const c_void) {
    match handles::remove(client as u64) {
        Some(_service) => info!(handle = client as u64, "admin client closed"),
        None => error!("invalid handle, ignoring"),
    }
}

/// Releases a single string owned by the library.
#[unsafe(no_mangle)]
pub extern "C" fn kafka_admin_free_string(ptr: *mut c_char) {
    unsafe { free_c_string(ptr) };
}

// ---------- FFI: describe cluster ----------

#[unsafe(no_mangle)]
pub extern "C" fn describe_cluster(client: *const c_void) -> *const describe_cluster_result_t {
    let Some(service) = handles::get(client as u64) else {
        error!("invalid handle, ignoring");
        return std::ptr::null();
    };

    let cluster = match service.describe_cluster() {
        Ok(cluster) => cluster,
        Err(e) => {
            error!("error describing cluster: {e}");
            return std::ptr::null();
        }
    };

    let nodes: Vec<node_t> = cluster.nodes.iter().map(node_ext).collect();
    let (num_nodes, nodes) = boxed_array(nodes);

    let controller = match &cluster.controller {
        Some(node) => Box::into_raw(Box::new(node_ext(node))),
        None => std::ptr::null_mut(),
    };

    let ops: Vec<c_char> = cluster
        .authorized_operations
        .iter()
        .map(|&code| code as c_char)
        .collect();
    let (num_authorized_operations, authorized_operations) = boxed_array(ops);

    Box::into_raw(Box::new(describe_cluster_result_t {
        num_nodes,
        nodes,
        controller,
        cluster_id: opt_c_string(cluster.cluster_id),
        num_authorized_operations,
        authorized_operations,
    }))
}

#[unsafe(no_mangle)]
pub extern "C" fn free_describe_cluster_result(result: *const describe_cluster_result_t) {
    if result.is_null() {
        return;
    }
    unsafe {
        let result = Box::from_raw(result as *mut describe_cluster_result_t);
        if !result.nodes.is_null() {
            for i in 0..result.num_nodes as usize {
                free_node_fields(&*result.nodes.add(i));
            }
            free_boxed_array(result.num_nodes, result.nodes);
        }
        if !result.controller.is_null() {
            free_node_fields(&*result.controller);
            let _ = Box::from_raw(result.controller);
        }
        free_c_string(result.cluster_id);
        free_boxed_array(result.num_authorized_operations, result.authorized_operations);
    }
}

fn node_ext(node: &BrokerNode) -> node_t {
    node_t {
        id: node.id,
        host: to_c_string(node.host.clone()),
        port: node.port,
        rack: opt_c_string(node.rack.clone()),
    }
}

unsafe fn free_node_fields(node: &node_t) {
    unsafe {
        free_c_string(node.host);
        free_c_string(node.rack);
    }
}

// ---------- FFI: topic management ----------

#[unsafe(no_mangle)]
pub extern "C" fn create_topics(
    client: *const c_void,
    num_new_topics: c_int,
    new_topics: *const new_topic_t,
) -> *const create_topics_result_t {
    let Some(service) = handles::get(client as u64) else {
        error!("invalid handle, ignoring");
        return std::ptr::null();
    };
    if num_new_topics > 0 && new_topics.is_null() {
        error!("create_topics: new_topics is null");
        return std::ptr::null();
    }

    let mut specs = Vec::with_capacity(num_new_topics.max(0) as usize);
    for i in 0..num_new_topics.max(0) as usize {
        let ext = unsafe { &*new_topics.add(i) };
        let Some(name) = (unsafe { cstr_arg(ext.name) }) else {
            error!("create_topics: topic name {i} is null or not valid UTF-8");
            return std::ptr::null();
        };
        specs.push(NewTopicSpec {
            name,
            num_partitions: ext.num_partitions,
            replication_factor: ext.replication_factor,
        });
    }

    let created = match service.create_topics(&specs) {
        Ok(created) => created,
        Err(e) => {
            error!("error creating topics: {e}");
            return std::ptr::null();
        }
    };

    let topics: Vec<create_topic_result_t> = created
        .into_iter()
        .map(|topic| create_topic_result_t {
            topic: to_c_string(topic.name),
            error: opt_c_string(topic.error),
            uuid: std::ptr::null_mut(),
            num_partitions: topic.num_partitions,
            replication_factor: topic.replication_factor,
        })
        .collect();
    let (num_topics, topics) = boxed_array(topics);

    Box::into_raw(Box::new(create_topics_result_t { num_topics, topics }))
}

#[unsafe(no_mangle)]
pub extern "C" fn free_create_topics_result(result: *const create_topics_result_t) {
    if result.is_null() {
        return;
    }
    unsafe {
        let result = Box::from_raw(result as *mut create_topics_result_t);
        if !result.topics.is_null() {
            for i in 0..result.num_topics as usize {
                let topic = &*result.topics.add(i);
                free_c_string(topic.topic);
                free_c_string(topic.error);
                free_c_string(topic.uuid);
            }
            free_boxed_array(result.num_topics, result.topics);
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn delete_topics(
    client: *const c_void,
    num_topics: c_int,
    topics: *const *const c_char,
) -> *const delete_topics_result_t {
    let Some(service) = handles::get(client as u64) else {
        error!("invalid handle, ignoring");
        return std::ptr::null();
    };
    if num_topics > 0 && topics.is_null() {
        error!("delete_topics: topics is null");
        return std::ptr::null();
    }

    let mut names = Vec::with_capacity(num_topics.max(0) as usize);
    for i in 0..num_topics.max(0) as usize {
        let Some(name) = (unsafe { cstr_arg(*topics.add(i)) }) else {
            error!("delete_topics: topic name {i} is null or not valid UTF-8");
            return std::ptr::null();
        };
        names.push(name);
    }

    let deleted = match service.delete_topics(&names) {
        Ok(deleted) => deleted,
        Err(e) => {
            error!("error deleting topics: {e}");
            return std::ptr::null();
        }
    };

    let topics: Vec<delete_topic_result_t> = deleted
        .into_iter()
        .map(|topic| delete_topic_result_t {
            topic: to_c_string(topic.name),
            error: opt_c_string(topic.error),
        })
        .collect();
    let (num_topics, topics) = boxed_array(topics);

    Box::into_raw(Box::new(delete_topics_result_t { num_topics, topics }))
}

#[unsafe(no_mangle)]
pub extern "C" fn free_delete_topics_result(result: *const delete_topics_result_t) {
    if result.is_null() {
        return;
    }
    unsafe {
        let result = Box::from_raw(result as *mut delete_topics_result_t);
        if !result.topics.is_null() {
            for i in 0..result.num_topics as usize {
                let topic = &*result.topics.add(i);
                free_c_string(topic.topic);
                free_c_string(topic.error);
            }
            free_boxed_array(result.num_topics, result.topics);
        }
    }
}
