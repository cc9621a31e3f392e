use std::sync::Arc;

/// A single purchasable product. The catalog is fixed at startup, so ids
/// double as stable handles for the metrics store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f32,
    pub image: String,
    pub description: String,
}

/// Immutable product list, shared by handle.
#[derive(Debug, Clone)]
pub struct Catalog(Arc<[Product]>);

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self(products.into())
    }

    /// The demo assortment. Ids follow definition order.
    pub fn demo() -> Self {
        Self::new(vec![
            product(0, "Watch", 56.2, "/assets/img/watch.svg", "Nice Watch"),
            product(1, "Camera", 34.2, "/assets/img/camera.svg", "Nice Camera"),
            product(2, "Glass", 24.2, "/assets/img/glass.svg", "Nice Glass"),
            product(3, "Toy", 56.2, "/assets/img/toy.svg", "Nice Toy"),
        ])
    }

    /// Every product, in definition order.
    pub fn all(&self) -> Vec<Product> {
        self.0.to_vec()
    }

    /// Look up one product. `None` when the id is unknown.
    pub fn get(&self, id: u32) -> Option<Product> {
        self.0.iter().find(|product| product.id == id).cloned()
    }
}

fn product(id: u32, name: &str, price: f32, image: &str, description: &str) -> Product {
    Product {
        id,
        name: name.to_owned(),
        price,
        image: image.to_owned(),
        description: description.to_owned(),
    }
}
