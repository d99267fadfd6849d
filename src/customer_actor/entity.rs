//! Entity trait implementation for [`Customer`].
//!
//! Registration checks that a name is present and that the email looks like
//! one; both failures surface as [`CustomerError::ValidationError`](super::CustomerError).

use crate::framework::ActorEntity;
use crate::model::{Customer, CustomerCreate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Customer {
    type Id = String;
    type CreateParams = CustomerCreate;
    type UpdateParams = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: String, params: CustomerCreate) -> Result<Self, String> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err("customer name must not be empty".to_string());
        }
        if !params.email.contains('@') {
            return Err(format!("invalid email address: {}", params.email));
        }
        Ok(Self::new(id, name, params.email))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, email: &str) -> CustomerCreate {
        CustomerCreate {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_from_create_params_trims_name() {
        let customer = Customer::from_create_params("customer_1".into(), params("  Ana ", "ana@x.io")).unwrap();
        assert_eq!(customer, Customer::new("customer_1", "Ana", "ana@x.io"));
    }

    #[test]
    fn test_from_create_params_rejects_blank_name_and_bad_email() {
        assert!(Customer::from_create_params("customer_1".into(), params("  ", "ana@x.io")).is_err());
        assert!(Customer::from_create_params("customer_1".into(), params("Ana", "ana.x.io")).is_err());
    }
}
