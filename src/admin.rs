//! Admin operations against a Kafka cluster.
//!
//! `AdminService` wraps an rdkafka [`AdminClient`] and exposes the blocking
//! operations the FFI surface needs. Async admin futures are driven on the
//! shared crate runtime so callers block until the broker answers or the
//! operation timeout expires.

use std::time::Duration;

use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use tracing::{debug, info, warn};

use crate::config::AdminConfig;
use crate::error::Result;
use crate::runtime;

/// One broker as reported by cluster metadata. librdkafka metadata carries
/// no rack tags, so `rack` stays `None` unless a future client surfaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerNode {
    pub id: i32,
    pub host: String,
    pub port: i32,
    pub rack: Option<String>,
}

/// Snapshot of the cluster returned by [`AdminService::describe_cluster`].
#[derive(Debug, Clone)]
pub struct ClusterInfo {
    pub nodes: Vec<BrokerNode>,
    pub controller: Option<BrokerNode>,
    pub cluster_id: Option<String>,
    /// ACL operation codes the caller is authorized for. Not surfaced by
    /// librdkafka metadata; empty until it is.
    pub authorized_operations: Vec<i8>,
}

/// Request to create one topic. Negative partition or replication values
/// mean "use the broker default".
#[derive(Debug, Clone)]
pub struct NewTopicSpec {
    pub name: String,
    pub num_partitions: i32,
    pub replication_factor: i16,
}

impl NewTopicSpec {
    /// Partition count handed to the broker. librdkafka only accepts exactly
    /// -1 as "broker default", so every negative request collapses to it.
    pub fn partitions(&self) -> i32 {
        if self.num_partitions < 0 {
            -1
        } else {
            self.num_partitions
        }
    }

    /// Replication factor handed to the broker; negatives collapse to -1
    /// like [`Self::partitions`].
    pub fn replication(&self) -> i32 {
        if self.replication_factor < 0 {
            -1
        } else {
            i32::from(self.replication_factor)
        }
    }
}

/// Per-topic outcome of a create-topics call. On success the requested
/// partition/replication values are echoed back; `-1` when the broker
/// default was requested.
#[derive(Debug, Clone)]
pub struct CreatedTopic {
    pub name: String,
    pub error: Option<String>,
    pub num_partitions: i32,
    pub replication_factor: i32,
}

/// Per-topic outcome of a delete-topics call.
#[derive(Debug, Clone)]
pub struct DeletedTopic {
    pub name: String,
    pub error: Option<String>,
}

pub struct AdminService {
    admin: AdminClient<DefaultClientContext>,
    timeout: Duration,
}

impl AdminService {
    pub fn new(config: &AdminConfig) -> Result<Self> {
        config.validate()?;
        let admin: AdminClient<DefaultClientContext> = config.to_client_config().create()?;
        Ok(Self {
            admin,
            timeout: config.operation_timeout(),
        })
    }

    fn admin_options(&self) -> AdminOptions {
        AdminOptions::new()
            .operation_timeout(Some(self.timeout))
            .request_timeout(Some(self.timeout))
    }

    /// Fetches broker metadata and the cluster id. The controller is
    /// reported as the broker that served the metadata request; librdkafka
    /// does not expose the controller id directly.
    pub fn describe_cluster(&self) -> Result<ClusterInfo> {
        let metadata = self.admin.inner().fetch_metadata(None, self.timeout)?;

        let nodes: Vec<BrokerNode> = metadata
            .brokers()
            .iter()
            .map(|broker| BrokerNode {
                id: broker.id(),
                host: broker.host().to_string(),
                port: broker.port(),
                rack: None,
            })
            .collect();

        let controller = nodes
            .iter()
            .find(|node| node.id == metadata.orig_broker_id())
            .cloned();

        let cluster_id = self.admin.inner().fetch_cluster_id(self.timeout);
        debug!(
            num_nodes = nodes.len(),
            cluster_id = cluster_id.as_deref().unwrap_or("<unknown>"),
            "fetched cluster metadata"
        );

        Ok(ClusterInfo {
            nodes,
            controller,
            cluster_id,
            authorized_operations: Vec::new(),
        })
    }

    /// Creates the requested topics, returning one result per topic in
    /// request order. Per-topic broker errors land in the result list; only
    /// transport-level failures abort the whole call.
    pub fn create_topics(&self, specs: &[NewTopicSpec]) -> Result<Vec<CreatedTopic>> {
        let new_topics: Vec<NewTopic<'_>> = specs
            .iter()
            .map(|spec| {
                NewTopic::new(
                    &spec.name,
                    spec.partitions(),
                    TopicReplication::Fixed(spec.replication()),
                )
            })
            .collect();

        let opts = self.admin_options();
        let results = runtime().block_on(self.admin.create_topics(new_topics.iter(), &opts))?;

        // Broker results come back in request order, so index matching stays
        // correct even when a caller submits duplicate topic names.
        let mut created = Vec::with_capacity(results.len());
        for (i, result) in results.into_iter().enumerate() {
            match result {
                Ok(name) => {
                    info!(topic = %name, "topic created");
                    let spec = specs.get(i);
                    created.push(CreatedTopic {
                        num_partitions: spec.map_or(-1, NewTopicSpec::partitions),
                        replication_factor: spec.map_or(-1, NewTopicSpec::replication),
                        name,
                        error: None,
                    });
                }
                Err((name, err)) => {
                    warn!(topic = %name, error = ?err, "failed to create topic");
                    created.push(CreatedTopic {
                        name,
                        error: Some(format!("{err:?}")),
                        num_partitions: -1,
                        replication_factor: -1,
                    });
                }
            }
        }
        Ok(created)
    }

    /// Deletes the named topics, returning one result per topic in request
    /// order.
    pub fn delete_topics(&self, topics: &[String]) -> Result<Vec<DeletedTopic>> {
        let topic_refs: Vec<&str> = topics.iter().map(String::as_str).collect();

        let opts = self.admin_options();
        let results = runtime().block_on(self.admin.delete_topics(&topic_refs, &opts))?;

        let mut deleted = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(name) => {
                    info!(topic = %name, "topic deleted");
                    deleted.push(DeletedTopic { name, error: None });
                }
                Err((name, err)) => {
                    warn!(topic = %name, error = ?err, "failed to delete topic");
                    deleted.push(DeletedTopic {
                        name,
                        error: Some(format!("{err:?}")),
                    });
                }
            }
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdminConfig;

    #[test]
    fn rejects_config_without_brokers() {
        assert!(AdminService::new(&AdminConfig::new()).is_err());
    }

    #[test]
    fn client_creation_does_not_contact_the_broker() {
        // librdkafka connects lazily; a syntactically valid config must
        // produce a client even when nothing listens on the address.
        let config = AdminConfig::from_brokers("127.0.0.1:1");
        assert!(AdminService::new(&config).is_ok());
    }

    #[test]
    fn rejects_unknown_config_property() {
        let mut config = AdminConfig::from_brokers("127.0.0.1:9092");
        config.set("definitely.not.a.librdkafka.property", "x");
        assert!(AdminService::new(&config).is_err());
    }

    #[test]
    fn negative_sizing_collapses_to_broker_default() {
        let spec = NewTopicSpec {
            name: "defaults".into(),
            num_partitions: -2,
            replication_factor: -7,
        };
        assert_eq!(spec.partitions(), -1);
        assert_eq!(spec.replication(), -1);
    }

    #[test]
    fn positive_sizing_passes_through() {
        let spec = NewTopicSpec {
            name: "sized".into(),
            num_partitions: 3,
            replication_factor: 2,
        };
        assert_eq!(spec.partitions(), 3);
        assert_eq!(spec.replication(), 2);
    }

    #[test]
    #[ignore] // needs a Kafka broker on localhost:9092
    fn create_topic_against_live_broker() {
        let service = AdminService::new(&AdminConfig::from_brokers("localhost:9092")).unwrap();
        let specs = [NewTopicSpec {
            name: "kafkaadmin-unit-test".into(),
            num_partitions: 1,
            replication_factor: 1,
        }];
        let results = service.create_topics(&specs).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "kafkaadmin-unit-test");
    }
}
