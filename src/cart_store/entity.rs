//! Record trait implementation for the Cart domain type.
//!
//! Carts are created empty, never updated field by field and only change through
//! [`CartAction`]s.

use super::actions::CartAction;
use crate::domain::Cart;
use crate::framework::Record;
use std::convert::Infallible;

impl Record for Cart {
    const KIND: &'static str = "cart";

    type Create = ();
    type Update = Infallible;
    type Action = CartAction;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create_params(id: String, _params: ()) -> Self {
        Self::new(id)
    }

    fn on_update(&mut self, update: Infallible) {
        match update {}
    }

    fn handle_action(&mut self, action: CartAction) {
        match action {
            CartAction::AddProduct(product_id) => {
                self.add_product(&product_id);
            }
        }
    }
}
