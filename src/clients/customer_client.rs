//! # Customer Client
//!
//! High-level API for the Customer actor. Also serves as the
//! [`CustomerLookup`] used by order creation.
use crate::clients::actor_client::ActorClient;
use crate::create_order::CustomerLookup;
use crate::customer_actor::CustomerError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Customer, CustomerCreate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<String, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Custom(msg) => CustomerError::ValidationError(msg),
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl CustomerLookup for CustomerClient {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, CustomerError> {
        self.get(id.to_string()).await
    }
}
