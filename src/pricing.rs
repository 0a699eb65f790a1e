//! Prices

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso};
use thiserror::Error;

use crate::{cart::CartLineItem, products::ProductId};

/// Flat delivery fee, in centavos.
///
/// All prices are in Brazilian reais ([`iso::BRL`]).
pub const DELIVERY_FEE_MINOR: i64 = 3_50;

/// Errors that can occur while pricing a cart.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A price or line total does not fit in minor units.
    #[error("price of product {0} cannot be represented in minor units")]
    Unrepresentable(ProductId),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Converts a major-unit price to minor units, rounding half away from zero.
pub fn price_minor(price: Decimal) -> Option<i64> {
    price
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_i64()
}

/// Unit price of a line item.
///
/// # Errors
///
/// - [`PricingError::Unrepresentable`]: the price does not fit in minor units.
pub fn unit_price(item: &CartLineItem) -> Result<Money<'static, iso::Currency>, PricingError> {
    let minor =
        price_minor(item.product().price).ok_or(PricingError::Unrepresentable(item.id()))?;

    Ok(Money::from_minor(minor, iso::BRL))
}

/// Price times amount for a single line item.
///
/// # Errors
///
/// - [`PricingError::Unrepresentable`]: the line total overflows minor units.
pub fn line_total(item: &CartLineItem) -> Result<Money<'static, iso::Currency>, PricingError> {
    let unit = unit_price(item)?.to_minor_units();

    let total = unit
        .checked_mul(i64::from(item.amount().get()))
        .ok_or(PricingError::Unrepresentable(item.id()))?;

    Ok(Money::from_minor(total, iso::BRL))
}

/// Sum of every line total; zero for an empty cart.
///
/// # Errors
///
/// Returns a `PricingError` if a line cannot be priced or the addition fails.
pub fn subtotal(items: &[CartLineItem]) -> Result<Money<'static, iso::Currency>, PricingError> {
    items
        .iter()
        .try_fold(Money::from_minor(0, iso::BRL), |acc, item| {
            Ok(acc.add(line_total(item)?)?)
        })
}

/// Subtotal, delivery fee and total of a cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    /// Sum of `price * amount` over every line
    pub subtotal: Money<'static, iso::Currency>,

    /// Flat delivery fee
    pub delivery_fee: Money<'static, iso::Currency>,

    /// Subtotal plus delivery fee
    pub total: Money<'static, iso::Currency>,
}

impl CartSummary {
    /// Price the given cart contents.
    ///
    /// # Errors
    ///
    /// Returns a `PricingError` if a line cannot be priced or the addition fails.
    pub fn from_items(items: &[CartLineItem]) -> Result<Self, PricingError> {
        let subtotal = subtotal(items)?;
        let delivery_fee = Money::from_minor(DELIVERY_FEE_MINOR, iso::BRL);
        let total = subtotal.add(delivery_fee)?;

        Ok(Self {
            subtotal,
            delivery_fee,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use testresult::TestResult;

    use crate::products::CatalogProduct;

    use super::*;

    fn item(id: u64, price: Decimal, amount: u32) -> Result<CartLineItem, &'static str> {
        let product = CatalogProduct {
            id: ProductId::new(id),
            name: format!("Café {id}"),
            description: String::new(),
            price,
            image: None,
            tags: Vec::new(),
        };

        Ok(CartLineItem::with_amount(
            product,
            NonZeroU32::new(amount).ok_or("zero amount")?,
        ))
    }

    #[test]
    fn price_minor_rounds_half_away_from_zero() {
        assert_eq!(price_minor(Decimal::new(990, 2)), Some(990));
        assert_eq!(price_minor(Decimal::new(99, 1)), Some(990));
        assert_eq!(price_minor(Decimal::new(9_905, 3)), Some(991));
        assert_eq!(price_minor(Decimal::new(9_904, 3)), Some(990));
    }

    #[test]
    fn line_total_multiplies_by_amount() -> TestResult {
        let line = item(1, Decimal::new(990, 2), 3)?;

        assert_eq!(line_total(&line)?, Money::from_minor(2_970, iso::BRL));

        Ok(())
    }

    #[test]
    fn subtotal_of_empty_cart_is_zero() -> TestResult {
        assert_eq!(subtotal(&[])?, Money::from_minor(0, iso::BRL));

        Ok(())
    }

    #[test]
    fn summary_adds_delivery_fee() -> TestResult {
        let items = [
            item(1, Decimal::new(990, 2), 1)?,
            item(2, Decimal::new(1_000, 2), 2)?,
        ];

        let summary = CartSummary::from_items(&items)?;

        assert_eq!(summary.subtotal.to_minor_units(), 2_990);
        assert_eq!(summary.delivery_fee.to_minor_units(), 350);
        assert_eq!(summary.total.to_minor_units(), 3_340);

        Ok(())
    }

    #[test]
    fn summary_of_empty_cart_is_just_the_fee() -> TestResult {
        let summary = CartSummary::from_items(&[])?;

        assert_eq!(summary.subtotal.to_minor_units(), 0);
        assert_eq!(summary.total.to_minor_units(), 350);

        Ok(())
    }

    #[test]
    fn huge_price_is_unrepresentable() -> TestResult {
        let line = item(5, Decimal::MAX, 1)?;

        assert_eq!(
            line_total(&line),
            Err(PricingError::Unrepresentable(ProductId::new(5)))
        );

        Ok(())
    }
}
