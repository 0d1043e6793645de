use std::fmt;

use crate::domain::product::errors::ProductAttributeError;
use crate::domain::product::errors::ProductIdError;

/// Product unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Parse a product ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not an integer, or not positive
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(ProductId(id)),
            Ok(id) => Err(ProductIdError::InvalidFormat(format!(
                "{} (must be positive)",
                id
            ))),
            Err(e) => Err(ProductIdError::InvalidFormat(format!("{:?}: {}", s, e))),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Sellable catalog item.
///
/// Price and physical measurements are strictly positive, so the derived
/// volume and density are always defined. Dimensions are in centimetres,
/// weight in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    description: String,
    price: f64,
    width: f64,
    height: f64,
    length: f64,
    weight: f64,
}

impl Product {
    /// Create a validated product.
    ///
    /// # Errors
    /// * `EmptyDescription` - Description is blank
    /// * `NotFinite` - A numeric attribute is NaN or infinite
    /// * `NonPositive` - A numeric attribute is zero or negative
    pub fn new(
        id: ProductId,
        description: String,
        price: f64,
        width: f64,
        height: f64,
        length: f64,
        weight: f64,
    ) -> Result<Self, ProductAttributeError> {
        if description.trim().is_empty() {
            return Err(ProductAttributeError::EmptyDescription);
        }

        Ok(Self {
            id,
            description,
            price: Self::positive("price", price)?,
            width: Self::positive("width", width)?,
            height: Self::positive("height", height)?,
            length: Self::positive("length", length)?,
            weight: Self::positive("weight", weight)?,
        })
    }

    fn positive(field: &'static str, value: f64) -> Result<f64, ProductAttributeError> {
        if !value.is_finite() {
            Err(ProductAttributeError::NotFinite { field })
        } else if value <= 0.0 {
            Err(ProductAttributeError::NonPositive { field, value })
        } else {
            Ok(value)
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Volume in cubic metres.
    pub fn volume(&self) -> f64 {
        (self.width / 100.0) * (self.height / 100.0) * (self.length / 100.0)
    }

    /// Density in kilograms per cubic metre.
    pub fn density(&self) -> f64 {
        self.weight / self.volume()
    }
}

/// One page of products plus the size of the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total_items: u64,
}

/// A product together with its derived measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub product: Product,
    pub volume: f64,
    pub density: f64,
}

impl From<Product> for ProductDetails {
    fn from(product: Product) -> Self {
        let volume = product.volume();
        let density = product.density();
        Self {
            product,
            volume,
            density,
        }
    }
}
