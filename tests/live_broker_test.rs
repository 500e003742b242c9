// End-to-end tests against a real broker, exercising the C surface the way
// a host process would: build the config array, mint a handle, read the
// returned structs, and free everything through the exported functions.
//
// All tests are ignored by default; run them with a Kafka broker listening
// on localhost:9092:
//
//   cargo test --test live_broker_test -- --ignored

use std::ffi::{CStr, CString, c_char, c_int, c_void};

use kafkaadmin::{
    create_admin_client, create_topics, delete_admin_client, delete_topics, describe_cluster,
    free_create_topics_result, free_delete_topics_result, free_describe_cluster_result,
    types::{key_value_t, new_topic_t},
};

const BOOTSTRAP_SERVERS: &str = "localhost:9092";

fn create_client() -> *mut c_void {
    let key = CString::new("bootstrap.servers").unwrap();
    let value = CString::new(BOOTSTRAP_SERVERS).unwrap();
    let entries = [key_value_t {
        key: key.as_ptr(),
        value: value.as_ptr(),
    }];
    let client = create_admin_client(entries.len() as c_int, entries.as_ptr());
    assert!(!client.is_null(), "could not create admin client");
    client
}

unsafe fn read_str<'a>(ptr: *const c_char) -> &'a str {
    assert!(!ptr.is_null());
    unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
}

#[test]
#[ignore] // needs a Kafka broker on localhost:9092
fn test_describe_cluster() {
    let client = create_client();

    let cluster = describe_cluster(client);
    assert!(!cluster.is_null());

    unsafe {
        assert!((*cluster).num_nodes >= 1);
        assert!(!(*cluster).nodes.is_null());
        for i in 0..(*cluster).num_nodes as usize {
            let node = (*cluster).nodes.add(i);
            assert!((*node).id >= 0);
            assert!(!read_str((*node).host).is_empty());
            assert!((*node).port > 0);
        }

        let controller = (*cluster).controller;
        assert!(!controller.is_null());
        assert!((*controller).id >= 0);

        assert!(!read_str((*cluster).cluster_id).is_empty());

        // Authorized operations are not surfaced by librdkafka.
        assert_eq!((*cluster).num_authorized_operations, 0);
        assert!((*cluster).authorized_operations.is_null());
    }

    free_describe_cluster_result(cluster);
    delete_admin_client(client);
}

#[test]
#[ignore] // needs a Kafka broker on localhost:9092
fn test_create_and_delete_topics() {
    let client = create_client();
    let topic_name = format!("kafkaadmin-ffi-test-{}", std::process::id());

    let name = CString::new(topic_name.clone()).unwrap();
    let requests = [new_topic_t {
        name: name.as_ptr(),
        num_partitions: 2,
        replication_factor: 1,
    }];

    let created = create_topics(client, requests.len() as c_int, requests.as_ptr());
    assert!(!created.is_null());
    unsafe {
        assert_eq!((*created).num_topics, 1);
        let topic = &*(*created).topics;
        assert_eq!(read_str(topic.topic), topic_name);
        assert!(topic.error.is_null(), "create failed: {}", read_str(topic.error));
        assert_eq!(topic.num_partitions, 2);
        assert_eq!(topic.replication_factor, 1);
    }
    free_create_topics_result(created);

    let names: [*const c_char; 1] = [name.as_ptr()];
    let deleted = delete_topics(client, names.len() as c_int, names.as_ptr());
    assert!(!deleted.is_null());
    unsafe {
        assert_eq!((*deleted).num_topics, 1);
        let topic = &*(*deleted).topics;
        assert_eq!(read_str(topic.topic), topic_name);
        assert!(topic.error.is_null(), "delete failed: {}", read_str(topic.error));
    }
    free_delete_topics_result(deleted);

    delete_admin_client(client);
}

#[test]
#[ignore] // needs a Kafka broker on localhost:9092
fn negative_sizing_creates_topic_with_broker_defaults() {
    let client = create_client();
    let topic_name = format!("kafkaadmin-default-sizing-{}", std::process::id());

    // Any negative value selects the broker default, not just -1.
    let name = CString::new(topic_name.clone()).unwrap();
    let requests = [new_topic_t {
        name: name.as_ptr(),
        num_partitions: -2,
        replication_factor: -2,
    }];

    let created = create_topics(client, requests.len() as c_int, requests.as_ptr());
    assert!(!created.is_null());
    unsafe {
        assert_eq!((*created).num_topics, 1);
        let topic = &*(*created).topics;
        assert_eq!(read_str(topic.topic), topic_name);
        assert!(topic.error.is_null(), "create failed: {}", read_str(topic.error));
        assert_eq!(topic.num_partitions, -1);
        assert_eq!(topic.replication_factor, -1);
    }
    free_create_topics_result(created);

    let names: [*const c_char; 1] = [name.as_ptr()];
    let deleted = delete_topics(client, names.len() as c_int, names.as_ptr());
    free_delete_topics_result(deleted);

    delete_admin_client(client);
}

#[test]
#[ignore] // needs a Kafka broker on localhost:9092
fn create_topics_reports_per_topic_errors() {
    let client = create_client();

    // A replication factor no single-broker cluster can satisfy.
    let name = CString::new("kafkaadmin-overreplicated").unwrap();
    let requests = [new_topic_t {
        name: name.as_ptr(),
        num_partitions: 1,
        replication_factor: 100,
    }];

    let created = create_topics(client, requests.len() as c_int, requests.as_ptr());
    assert!(!created.is_null());
    unsafe {
        assert_eq!((*created).num_topics, 1);
        let topic = &*(*created).topics;
        assert!(!topic.error.is_null());
        assert_eq!(topic.num_partitions, -1);
        assert_eq!(topic.replication_factor, -1);
    }
    free_create_topics_result(created);

    delete_admin_client(client);
}
