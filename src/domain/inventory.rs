/// An electronics item held in stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Electronic {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub warranty_months: u32,
    pub price: f64,
    pub quantity: i32,
}

/// A perishable grocery item held in stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Grocery {
    pub id: u32,
    pub name: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub expiry_date: String,
    pub price: f64,
    pub quantity: i32,
}

impl Electronic {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        brand: impl Into<String>,
        warranty_months: u32,
        price: f64,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            warranty_months,
            price,
            quantity,
        }
    }
}

impl Grocery {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        expiry_date: impl Into<String>,
        price: f64,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            expiry_date: expiry_date.into(),
            price,
            quantity,
        }
    }
}
