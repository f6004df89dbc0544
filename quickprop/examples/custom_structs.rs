//! Generating structs with `#[derive(Record)]` and `record!`

use quickprop::{
    ArrayConfig, NumberConfig, Record, StringConfig, arrays, booleans, integers, numbers,
    one_of, quickcheck, record, records, strings,
};

#[derive(Debug, Clone, Record)]
struct Product {
    sku: String,
    price: f64,
    in_stock: bool,
}

#[derive(Debug, Clone)]
struct Basket {
    items: Vec<Product>,
    coupon: Option<String>,
}

fn products() -> ProductShape {
    ProductShape::new(
        strings(StringConfig::with_lengths(6, 6).prefix("SKU-")).unwrap(),
        numbers(NumberConfig {
            min: 0.5,
            max: 250.0,
        })
        .unwrap(),
        booleans(),
    )
}

fn basket_total(basket: &Basket) -> f64 {
    let total: f64 = basket.items.iter().map(|p| p.price).sum();
    match basket.coupon.as_deref() {
        Some("HALF") => total / 2.0,
        _ => total,
    }
}

fn main() {
    println!("=== Derived record ===");
    let result = quickcheck(
        |product: Product| product.sku.starts_with("SKU-") && product.price > 0.0,
        records(products()),
    );
    println!("{}", if result.is_ok() { "✓ passed" } else { "✗ failed" });

    println!("\n=== Ad-hoc record ===");
    let baskets = record!(Basket {
        items: arrays(records(products()), ArrayConfig { max_length: 8 }),
        coupon: one_of(vec![None, Some("HALF".to_string()), Some("BOGUS".to_string())]).unwrap(),
    });
    let result = quickcheck(|basket: Basket| basket_total(&basket) >= 0.0, baskets);
    match result {
        Ok(()) => println!("✓ totals are never negative"),
        Err(failure) => println!("✗ {}", failure),
    }

    println!("\n=== A property that fails ===");
    let result = quickcheck(
        |quantity: u32| quantity * 3 < 100,
        integers(0u32, 50).unwrap(),
    );
    if let Err(failure) = result {
        println!("✗ {}", failure.detailed_report());
    }
}
