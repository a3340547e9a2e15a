use crate::models::Product;

// (name, description, price) of the storefront's fixed assortment
const SEED: [(&str, &str, f64); 5] = [
    (
        "Zestaw klocków konstrukcyjnych",
        "Duży zestaw klocków do budowania zamków i robotów.",
        129.99,
    ),
    (
        "Pluszowy miś interaktywny",
        "Miś, który mówi, śpiewa i reaguje na dotyk.",
        75.50,
    ),
    (
        "Zdalnie sterowany dron",
        "Mini dron dla początkujących z kamerą HD.",
        249.00,
    ),
    (
        "Gra planszowa 'Poszukiwacze Skarbów'",
        "Ekscytująca gra planszowa dla całej rodziny.",
        45.99,
    ),
    (
        "Zestaw do malowania palcami",
        "Bezpieczne farby i akcesoria dla małych artystów.",
        35.00,
    ),
];

/// Read-only product catalog, built once at startup and shared for the whole
/// process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds the seed assortment; every call generates new ids.
    pub fn seed() -> Self {
        Self {
            products: SEED
                .iter()
                .map(|(name, description, price)| Product::new(*name, *description, *price))
                .collect(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
