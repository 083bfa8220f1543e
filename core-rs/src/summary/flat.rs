// summary/flat.rs - Denormalized view over parsed collections
//
// Each FlatRecord joins one test outcome with its parent collection so two
// runs can be compared line by line.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::parser::{Collection, TestStatus};

/// One test outcome joined with its collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlatRecord {
    pub status: TestStatus,
    pub group: String,
    pub collection: String,
    pub instance: String,
}

impl FlatRecord {
    /// `<status>: <group>/<collection>: <instance>`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FlatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{}: {}",
            self.status, self.group, self.collection, self.instance
        )
    }
}

/// Flatten collections in collection order, then test order
pub fn flatten(collections: &[Collection]) -> Vec<FlatRecord> {
    collections
        .iter()
        .flat_map(|collection| {
            collection.tests.iter().map(move |test| FlatRecord {
                status: test.status,
                group: collection.group.clone(),
                collection: collection.name.clone(),
                instance: test.name.clone(),
            })
        })
        .collect()
}
