use serde::{Deserialize, Serialize};

/// A shopping cart. The cart file holds exactly one of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub products: Vec<LineItem>,
}

/// One entry of a cart: a product id and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: String,
    pub quantity: u32,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            products: Vec::new(),
        }
    }

    /// Adds one unit of `product_id` to the cart.
    ///
    /// Increments the existing line for that product, or appends a new line with
    /// quantity 1. Returns the line's new quantity. The product id is not checked
    /// against the product collection.
    pub fn add_product(&mut self, product_id: &str) -> u32 {
        if let Some(line) = self.products.iter_mut().find(|l| l.product == product_id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.products.push(LineItem {
            product: product_id.to_string(),
            quantity: 1,
        });
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_product_twice_increments_one_line() {
        let mut cart = Cart::new("c1");
        assert_eq!(cart.add_product("p1"), 1);
        assert_eq!(cart.add_product("p1"), 2);
        assert_eq!(
            cart.products,
            vec![LineItem { product: "p1".into(), quantity: 2 }]
        );
    }

    #[test]
    fn distinct_products_get_their_own_lines() {
        let mut cart = Cart::new("c1");
        cart.add_product("p1");
        cart.add_product("p2");
        assert_eq!(
            cart.products,
            vec![
                LineItem { product: "p1".into(), quantity: 1 },
                LineItem { product: "p2".into(), quantity: 1 },
            ]
        );
    }

    #[test]
    fn decodes_the_stored_shape() {
        let cart: Cart = serde_json::from_str(
            r#"{ "id": "c1", "products": [{ "product": "p1", "quantity": 3 }] }"#,
        )
        .unwrap();
        assert_eq!(cart.products[0].quantity, 3);
    }
}
