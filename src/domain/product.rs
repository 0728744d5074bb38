use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// # Record Store
/// This struct implements the [`Record`](crate::framework::Record) trait,
/// allowing it to be managed by a [`FileStore`](crate::framework::FileStore).
///
/// See [`impl Record for Product`](#impl-Record-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`]) and the truthy-override rule
///
/// Fields missing from a stored document decode as their empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub status: bool,
    pub stock: u32,
    pub category: String,
    pub thumbnails: Vec<String>,
}

impl Product {
    /// Creates a new active Product.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the store)
    /// * `params` - Caller-supplied fields
    pub fn new(id: impl Into<String>, params: ProductCreate) -> Self {
        Self {
            id: id.into(),
            title: params.title,
            description: params.description,
            code: params.code,
            price: params.price,
            status: true,
            stock: params.stock,
            category: params.category,
            thumbnails: params.thumbnails,
        }
    }
}

/// Payload for creating a product. Absent fields default to their empty value;
/// `id` and `status` are never taken from the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCreate {
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub thumbnails: Vec<String>,
}

/// Payload for a partial product update. `None` means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
}
