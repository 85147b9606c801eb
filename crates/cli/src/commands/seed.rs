//! Catalog seeding command.
//!
//! Inserts the sample Nigerian product catalog. Idempotent: a product whose
//! name already exists in the catalog is skipped, so re-running the command
//! never duplicates rows.
//!
//! # Usage
//!
//! ```bash
//! naijamart-cli seed
//! ```

use naijamart_core::Price;
use rust_decimal::Decimal;

use super::{CommandError, connect};

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: &'static str,
    original_price: Option<&'static str>,
    category: &'static str,
    image: &'static str,
    stock: i32,
    rating: &'static str,
    review_count: i32,
    on_sale: bool,
    sale_percentage: i32,
}

const SAMPLE_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Rice - 50kg bag",
        description: "Premium quality Nigerian rice from Kebbi State. Perfect for family meals and special occasions. Locally grown and processed.",
        price: "115000",
        original_price: Some("130000"),
        category: "grains",
        image: "/api/placeholder/400/300",
        stock: 50,
        rating: "4.8",
        review_count: 125,
        on_sale: true,
        sale_percentage: 12,
    },
    SeedProduct {
        name: "Fresh Yam Tubers - 5kg",
        description: "Fresh yam tubers from Oyo State. Perfect for pounding yam, boiling, or frying. High quality and freshly harvested.",
        price: "8500",
        original_price: Some("10000"),
        category: "tubers",
        image: "/api/placeholder/400/300",
        stock: 30,
        rating: "4.6",
        review_count: 87,
        on_sale: true,
        sale_percentage: 15,
    },
    SeedProduct {
        name: "Fresh Cassava - 10kg",
        description: "Fresh cassava roots perfect for making fufu, garri, or cassava flour. Sourced directly from local farmers.",
        price: "5000",
        original_price: None,
        category: "tubers",
        image: "/api/placeholder/400/300",
        stock: 25,
        rating: "4.5",
        review_count: 62,
        on_sale: false,
        sale_percentage: 0,
    },
    SeedProduct {
        name: "Live Catfish - 2kg",
        description: "Fresh live catfish from our partner fish farms. Perfect for pepper soup, stew, or grilling. Delivered alive and fresh.",
        price: "12000",
        original_price: Some("14000"),
        category: "protein",
        image: "/api/placeholder/400/300",
        stock: 15,
        rating: "4.9",
        review_count: 156,
        on_sale: true,
        sale_percentage: 14,
    },
    SeedProduct {
        name: "Dried Pepper Mix - 1kg",
        description: "Premium blend of dried peppers including scotch bonnet, cayenne, and bell peppers. Perfect for Nigerian soups and stews.",
        price: "3500",
        original_price: None,
        category: "spices",
        image: "/api/placeholder/400/300",
        stock: 100,
        rating: "4.7",
        review_count: 203,
        on_sale: false,
        sale_percentage: 0,
    },
    SeedProduct {
        name: "Palm Oil - 4 liters",
        description: "Pure red palm oil from fresh palm fruits. Perfect for cooking Nigerian dishes. Unrefined and natural.",
        price: "8000",
        original_price: Some("9000"),
        category: "oils",
        image: "/api/placeholder/400/300",
        stock: 40,
        rating: "4.8",
        review_count: 178,
        on_sale: true,
        sale_percentage: 11,
    },
    SeedProduct {
        name: "Sweet Plantain - 12 pieces",
        description: "Ripe sweet plantains perfect for dodo (fried plantain) or plantain porridge. Naturally sweet and fresh.",
        price: "2500",
        original_price: None,
        category: "fruits",
        image: "/api/placeholder/400/300",
        stock: 60,
        rating: "4.4",
        review_count: 94,
        on_sale: false,
        sale_percentage: 0,
    },
    SeedProduct {
        name: "Goat Meat - 3kg",
        description: "Fresh goat meat from free-range goats. Perfect for pepper soup, stew, or suya. Cut into convenient portions.",
        price: "25000",
        original_price: Some("28000"),
        category: "protein",
        image: "/api/placeholder/400/300",
        stock: 8,
        rating: "4.9",
        review_count: 89,
        on_sale: true,
        sale_percentage: 11,
    },
];

/// Seed the catalog with sample products.
///
/// # Errors
///
/// Returns an error if the database is unreachable, an insert fails, or a
/// hardcoded price/rating fails to parse.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    let mut inserted = 0_usize;
    let mut skipped = 0_usize;

    for product in SAMPLE_PRODUCTS {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM products WHERE name = $1)")
                .bind(product.name)
                .fetch_one(&pool)
                .await?;
        if exists.0 {
            skipped += 1;
            continue;
        }

        let price = parse_price(product.price)?;
        let original_price = product.original_price.map(parse_price).transpose()?;
        let rating = parse_rating(product.rating)?;

        sqlx::query(
            "INSERT INTO products (name, description, price, original_price, category, \
             image, stock, rating, review_count, on_sale, sale_percentage) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(product.name)
        .bind(product.description)
        .bind(price)
        .bind(original_price)
        .bind(product.category)
        .bind(product.image)
        .bind(product.stock)
        .bind(rating)
        .bind(product.review_count)
        .bind(product.on_sale)
        .bind(product.sale_percentage)
        .execute(&pool)
        .await?;

        inserted += 1;
        tracing::info!(name = product.name, "seeded product");
    }

    tracing::info!("Seeding complete!");
    tracing::info!("  Products inserted: {inserted}");
    tracing::info!("  Products skipped (already exist): {skipped}");

    Ok(())
}

fn parse_price(raw: &str) -> Result<Price, CommandError> {
    raw.parse::<Price>()
        .map_err(|e| CommandError::InvalidSeedData(e.to_string()))
}

fn parse_rating(raw: &str) -> Result<Decimal, CommandError> {
    raw.parse::<Decimal>()
        .map_err(|e| CommandError::InvalidSeedData(e.to_string()))
}
