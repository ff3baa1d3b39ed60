use crate::OutputFormat;
use crate::cart::models::Cart;
use crate::cart::pricing::{CartTotals, PromoStatus, price_cart};
use crate::commands::{client, money, truncate};
use crate::config::Config;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct CartView<'a> {
    cart: &'a Cart,
    totals: &'a CartTotals,
}

fn print_cart(cart: &Cart, totals: &CartTotals, format: OutputFormat) -> Result<()> {
    if let OutputFormat::Json = format {
        let view = CartView { cart, totals };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if cart.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    println!("{:<12} {:<44} {:>4} {:>10}", "ID", "Course", "Qty", "Price");
    println!("{}", "-".repeat(73));
    for item in &cart.items {
        println!(
            "{:<12} {:<44} {:>4} {:>10}",
            truncate(&item.course.id, 12),
            truncate(&item.course.title, 44),
            item.quantity,
            money(item.line_total())
        );
    }
    println!("{}", "-".repeat(73));

    println!("{:<62}{:>11}", "Subtotal", money(totals.subtotal));
    match &totals.promo {
        PromoStatus::Applied { code, percent } => {
            println!(
                "{:<62}{:>11}",
                format!("Discount ({}, {}%)", code, percent),
                format!("-{}", money(totals.discount))
            );
        }
        PromoStatus::Unrecognized { code } => {
            println!("Promo code '{}' was not recognized.", code);
        }
        PromoStatus::None => {}
    }
    println!("{:<62}{:>11}", "Total", money(totals.total));
    if totals.total_savings > 0.0 {
        println!("You save {}", money(totals.total_savings));
    }

    Ok(())
}

pub fn show(config: &Config, promo: Option<&str>, format: OutputFormat) -> Result<()> {
    let client = client(config)?;
    let cart = client.get_cart().context("Failed to fetch cart")?;
    let totals = price_cart(&cart.items, promo, &config.cart.promo_codes);
    print_cart(&cart, &totals, format)
}

pub fn add(config: &Config, course_id: &str) -> Result<()> {
    let client = client(config)?;
    client
        .add_to_cart(course_id)
        .with_context(|| format!("Failed to add course {} to cart", course_id))?;
    println!("✓ Added {} to cart", course_id);

    // Refetch so the printed cart is what the backend now holds.
    let cart = client.get_cart().context("Failed to fetch cart")?;
    let totals = price_cart(&cart.items, None, &config.cart.promo_codes);
    print_cart(&cart, &totals, OutputFormat::Text)
}

pub fn remove(config: &Config, course_id: &str) -> Result<()> {
    let client = client(config)?;
    client
        .remove_from_cart(course_id)
        .with_context(|| format!("Failed to remove course {} from cart", course_id))?;
    println!("✓ Removed {} from cart", course_id);

    let cart = client.get_cart().context("Failed to fetch cart")?;
    let totals = price_cart(&cart.items, None, &config.cart.promo_codes);
    print_cart(&cart, &totals, OutputFormat::Text)
}

pub fn checkout(config: &Config, promo: Option<&str>, dry_run: bool) -> Result<()> {
    let client = client(config)?;
    let cart = client.get_cart().context("Failed to fetch cart")?;

    if cart.is_empty() {
        anyhow::bail!("Cart is empty, nothing to check out");
    }

    let totals = price_cart(&cart.items, promo, &config.cart.promo_codes);

    if dry_run {
        println!("[DRY-RUN] Would check out {} item(s):", totals.item_count);
        return print_cart(&cart, &totals, OutputFormat::Text);
    }

    // The backend prices the order itself; an unknown code is passed on
    // untouched, matching how the totals above ignore it.
    let receipt = client
        .checkout(promo.map(str::trim).filter(|c| !c.is_empty()))
        .context("Checkout failed")?;

    println!(
        "✓ Order {} placed, {} charged",
        receipt.order_id,
        money(receipt.total)
    );
    if (receipt.total - totals.total).abs() >= 0.01 {
        tracing::warn!(
            expected = totals.total,
            charged = receipt.total,
            "backend total differs from cart estimate"
        );
    }
    for course_id in &receipt.enrolled_course_ids {
        println!("  Enrolled in {}", course_id);
    }

    Ok(())
}
