// Read-only fixture catalog, built once at startup

use std::collections::BTreeMap;

use super::model::{Connection, Identity, Instance, InstanceStatus, Region, RegionStatus};

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "password";

/// Instances keyed by id. Iteration order is the catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    instances: BTreeMap<u64, Instance>,
}

impl Catalog {
    pub fn new(instances: impl IntoIterator<Item = Instance>) -> Self {
        Self {
            instances: instances
                .into_iter()
                .map(|instance| (instance.id(), instance))
                .collect(),
        }
    }

    /// The four synthetic instances, all owned by `tenant`
    pub fn fixtures(tenant: &str) -> Self {
        use Region::{Eu, Us};
        use RegionStatus::{Migrating, Ready, Unready};

        Self::new([
            // Running in two regions
            fixture(tenant, 1, &[Eu, Us], &[(Us, Ready), (Eu, Ready)]),
            // Being migrated from us to eu
            fixture(tenant, 2, &[Eu], &[(Eu, Migrating)]),
            fixture(tenant, 3, &[Us], &[(Us, Unready)]),
            // Being migrated from eu to us,eu
            fixture(tenant, 4, &[Eu, Us], &[(Us, Migrating), (Eu, Ready)]),
        ])
    }

    pub fn get(&self, id: u64) -> Option<&Instance> {
        self.instances.get(&id)
    }

    /// Looks up a client-supplied id; ids below zero never match
    pub fn find(&self, id: i64) -> Option<&Instance> {
        u64::try_from(id).ok().and_then(|id| self.get(id))
    }

    pub fn name_taken(&self, name: &str) -> bool {
        self.instances.values().any(|instance| instance.name() == name)
    }

    pub fn identities(&self) -> Vec<&Identity> {
        self.instances.values().map(|instance| &instance.identity).collect()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

fn fixture(
    tenant: &str,
    id: u64,
    regions: &[Region],
    status: &[(Region, RegionStatus)],
) -> Instance {
    Instance {
        identity: Identity {
            tenant: tenant.to_string(),
            id,
            name: format!("mongo{id}"),
        },
        regions: regions.to_vec(),
        status: InstanceStatus {
            regions: status.iter().copied().collect(),
        },
        connection: Connection {
            endpoint: format!("mongodb://t1m{id}.cloudprovider.com:27017"),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        },
    }
}
