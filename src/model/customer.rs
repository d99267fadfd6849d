use serde::{Deserialize, Serialize};

/// A registered customer.
///
/// Order creation only cares that the customer exists; the rest is carried
/// along so the stored order records who placed it.
///
/// See [`impl ActorEntity for Customer`](#impl-ActorEntity-for-Customer) for the
/// creation parameters ([`CustomerCreate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Payload for registering a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}
