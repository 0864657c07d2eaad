//! Built-in mock catalog used when no catalog file is configured.

use rust_decimal::Decimal;

use super::{Business, Catalog, Item};
use crate::types::{BusinessId, Category, CurrencyCode, ItemId, Rating, Unit};

pub(super) fn catalog() -> Catalog {
    Catalog {
        currency: CurrencyCode::USD,
        businesses: businesses(),
        items: items(),
    }
}

fn business(
    id: i64,
    name: &str,
    owner: &str,
    location: &str,
    description: &str,
    established: &str,
    (rating, review_count, total_orders): (u8, u32, u32),
) -> Business {
    Business {
        id: BusinessId::new(id),
        name: name.to_string(),
        owner: owner.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        established: established.to_string(),
        rating: Rating::from_tenths(rating),
        review_count,
        total_orders,
    }
}

fn businesses() -> Vec<Business> {
    vec![
        business(
            1,
            "Fresh Farm Supplies Co.",
            "John Smith",
            "California, USA",
            "Premium organic vegetables and fresh produce supplier",
            "2018",
            (48, 156, 650),
        ),
        business(
            2,
            "Valley Produce Co.",
            "Maria Garcia",
            "Texas, USA",
            "Quality vegetables and seasonal produce",
            "2019",
            (46, 89, 420),
        ),
        business(
            3,
            "Dairy Direct Ltd.",
            "Roberto Italian",
            "New York, USA",
            "Premium dairy products and cheese supplier",
            "2016",
            (49, 234, 780),
        ),
        business(
            4,
            "Protein Plus Meats",
            "Ahmed Hassan",
            "Michigan, USA",
            "Fresh halal meat and poultry supplier",
            "2017",
            (47, 178, 520),
        ),
    ]
}

struct Listing<'a> {
    id: i64,
    name: &'a str,
    supplier: &'a str,
    business_name: &'a str,
    category: Category,
    description: &'a str,
    location: &'a str,
    price_cents: i64,
    unit: Unit,
    in_stock: bool,
    rating_tenths: u8,
    review_count: u32,
    total_orders: u32,
}

impl From<Listing<'_>> for Item {
    fn from(listing: Listing<'_>) -> Self {
        Self {
            id: ItemId::new(listing.id),
            name: listing.name.to_string(),
            supplier: listing.supplier.to_string(),
            business_name: listing.business_name.to_string(),
            category: listing.category,
            description: listing.description.to_string(),
            location: listing.location.to_string(),
            price: Decimal::new(listing.price_cents, 2),
            unit: listing.unit,
            in_stock: listing.in_stock,
            rating: Rating::from_tenths(listing.rating_tenths),
            review_count: listing.review_count,
            total_orders: listing.total_orders,
        }
    }
}

fn items() -> Vec<Item> {
    [
        Listing {
            id: 1,
            name: "Premium Tomatoes",
            supplier: "John Smith",
            business_name: "Fresh Farm Supplies Co.",
            category: Category::Vegetables,
            description: "Fresh, organic tomatoes perfect for street food preparation",
            location: "California, USA",
            price_cents: 250,
            unit: Unit::Kg,
            in_stock: true,
            rating_tenths: 48,
            review_count: 23,
            total_orders: 650,
        },
        Listing {
            id: 2,
            name: "Fresh Onions",
            supplier: "Maria Garcia",
            business_name: "Valley Produce Co.",
            category: Category::Vegetables,
            description: "High-quality yellow onions, perfect for cooking",
            location: "Texas, USA",
            price_cents: 180,
            unit: Unit::Kg,
            in_stock: true,
            rating_tenths: 46,
            review_count: 18,
            total_orders: 420,
        },
        Listing {
            id: 3,
            name: "Mozzarella Cheese",
            supplier: "Roberto Italian",
            business_name: "Dairy Direct Ltd.",
            category: Category::Dairy,
            description: "Premium mozzarella cheese for pizzas and sandwiches",
            location: "New York, USA",
            price_cents: 1200,
            unit: Unit::Kg,
            in_stock: true,
            rating_tenths: 49,
            review_count: 31,
            total_orders: 780,
        },
        Listing {
            id: 4,
            name: "Chicken Breast",
            supplier: "Ahmed Hassan",
            business_name: "Protein Plus Meats",
            category: Category::Meat,
            description: "Fresh, halal chicken breast for grilling and cooking",
            location: "Michigan, USA",
            price_cents: 850,
            unit: Unit::Kg,
            in_stock: true,
            rating_tenths: 47,
            review_count: 45,
            total_orders: 520,
        },
        Listing {
            id: 5,
            name: "Basmati Rice",
            supplier: "Raj Patel",
            business_name: "Grain Masters Inc.",
            category: Category::Grains,
            description: "Premium basmati rice, perfect for biryanis and rice dishes",
            location: "California, USA",
            price_cents: 320,
            unit: Unit::Kg,
            in_stock: true,
            rating_tenths: 45,
            review_count: 67,
            total_orders: 340,
        },
        Listing {
            id: 6,
            name: "Extra Virgin Olive Oil",
            supplier: "Elena Rossi",
            business_name: "Mediterranean Oils Co.",
            category: Category::Oils,
            description: "Premium extra virgin olive oil from Mediterranean olives",
            location: "California, USA",
            price_cents: 1500,
            unit: Unit::Liter,
            in_stock: false,
            rating_tenths: 48,
            review_count: 29,
            total_orders: 280,
        },
    ]
    .into_iter()
    .map(Item::from)
    .collect()
}
