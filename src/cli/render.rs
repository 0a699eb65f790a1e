//! Plain-text rendering of catalog, cart and order views.

use std::io::{self, Write};

use coffee_cart::{
    cart::CartManager,
    checkout::Order,
    notices::Notice,
    pricing::{self, CartSummary},
    products::CatalogProduct,
};
use rusty_money::{Money, iso};

pub(crate) fn products(out: &mut impl Write, products: &[CatalogProduct]) -> io::Result<()> {
    for product in products {
        let price = pricing::price_minor(product.price)
            .map(|minor| Money::from_minor(minor, iso::BRL).to_string())
            .unwrap_or_else(|| product.price.to_string());

        writeln!(out, "{:>4}  {:<28} {price}", product.id, product.name)?;

        if !product.description.is_empty() {
            writeln!(out, "      {}", product.description)?;
        }
    }

    Ok(())
}

pub(crate) fn cart(out: &mut impl Write, cart: &CartManager) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "Your cart is empty.");
    }

    for item in cart.items() {
        let line_total = pricing::line_total(item)
            .map_or_else(|error| error.to_string(), |total| total.to_string());

        writeln!(
            out,
            "{:>4}  {:<28} x{:<3} {line_total}",
            item.id(),
            item.product().name,
            item.amount()
        )?;
    }

    match cart.summary() {
        Ok(summary) => totals(out, &summary),
        Err(error) => writeln!(out, "Totals unavailable: {error}"),
    }
}

fn totals(out: &mut impl Write, summary: &CartSummary) -> io::Result<()> {
    writeln!(out, "Items:    {}", summary.subtotal)?;
    writeln!(out, "Delivery: {}", summary.delivery_fee)?;
    writeln!(out, "Total:    {}", summary.total)
}

pub(crate) fn order(out: &mut impl Write, order: &Order) -> io::Result<()> {
    let address = &order.address;

    writeln!(out, "Order placed at {}", order.placed_at)?;
    writeln!(out, "Delivering to {}, {}", address.street, address.number)?;

    if let Some(complement) = &address.complement {
        writeln!(out, "  {complement}")?;
    }

    writeln!(
        out,
        "  {} - {}, {} {}",
        address.district, address.city, address.state, address.postal_code
    )?;
    writeln!(out, "Paying with {} on delivery", order.payment_method)?;

    for item in &order.items {
        writeln!(out, "  {} x{}", item.product().name, item.amount())?;
    }

    writeln!(out, "Total: {}", order.total)
}

pub(crate) fn notices(out: &mut impl Write, notices: &[Notice]) -> io::Result<()> {
    for notice in notices {
        writeln!(out, "notice: {notice}")?;
    }

    Ok(())
}
