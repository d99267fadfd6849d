//! Entity trait implementation for [`Order`].

use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type UpdateParams = (); // write-once
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        Ok(Self::new(id, params.customer, params.products))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), String> {
        Err(format!("Order {} cannot be modified", self.id))
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}
