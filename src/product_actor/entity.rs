//! ActorEntity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Product`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! Stock can only go down through [`ProductAction::ReserveStock`], and a
//! reservation never takes more than is left, so stock cannot go negative.

use super::actions::{ProductAction, ProductActionResult, StockReservation};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        if params.price < Decimal::ZERO {
            return Err(ProductError::InvalidPrice(params.price));
        }
        Ok(Self::new(
            id,
            params.name,
            params.description,
            params.price,
            params.stock_quantity,
        ))
    }

    fn not_found(id: &ProductId) -> ProductError {
        ProductError::NotFound(*id)
    }

    /// The reserved lines must add up to a total that can be represented.
    fn check_transaction(results: &[ProductActionResult]) -> Result<(), ProductError> {
        results
            .iter()
            .filter_map(|result| match result {
                ProductActionResult::ReserveStock(reservation) => Some(reservation.line_total),
                ProductActionResult::CheckStock(_) => None,
            })
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line))
            .map(|_| ())
            .ok_or(ProductError::TotalOverflow)
    }

    /// Changes the unit price. Orders already placed keep the price they were placed at.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(price) = update.price {
            if price < Decimal::ZERO {
                return Err(ProductError::InvalidPrice(price));
            }
            self.price = price;
        }
        Ok(())
    }

    /// Handles custom actions for the Product entity.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `ReserveStock`: Decrements stock if enough is left
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock_quantity)),
            ProductAction::ReserveStock(0) => Err(ProductError::InvalidQuantity {
                product_id: self.id,
                quantity: 0,
            }),
            ProductAction::ReserveStock(quantity) => {
                if self.stock_quantity < quantity {
                    return Err(ProductError::InsufficientStock {
                        product_id: self.id,
                        available: self.stock_quantity,
                        requested: quantity,
                    });
                }
                let line_total = self
                    .price
                    .checked_mul(Decimal::from(quantity))
                    .ok_or(ProductError::LineTotalOverflow(self.id))?;
                self.stock_quantity -= quantity;
                Ok(ProductActionResult::ReserveStock(StockReservation {
                    product_id: self.id,
                    product_name: self.name.clone(),
                    unit_price: self.price,
                    quantity,
                    line_total,
                    remaining: self.stock_quantity,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn latte() -> Product {
        Product::new(ProductId(3), "Latte", "Espresso with steamed milk", dec!(4.00), 5)
    }

    #[tokio::test]
    async fn test_reserve_decrements_and_snapshots_price() {
        let mut product = latte();
        let result = product
            .handle_action(ProductAction::ReserveStock(2), &())
            .await
            .unwrap();

        assert_eq!(product.stock_quantity, 3);
        let ProductActionResult::ReserveStock(reservation) = result else {
            panic!("expected a reservation, got {result:?}");
        };
        assert_eq!(reservation.unit_price, dec!(4.00));
        assert_eq!(reservation.line_total, dec!(8.00));
        assert_eq!(reservation.product_name, "Latte");
        assert_eq!(reservation.remaining, 3);
    }

    #[tokio::test]
    async fn test_reserve_more_than_stock_fails_untouched() {
        let mut product = latte();
        let err = product
            .handle_action(ProductAction::ReserveStock(6), &())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ProductError::InsufficientStock {
                product_id: ProductId(3),
                available: 5,
                requested: 6
            }
        );
        assert_eq!(product.stock_quantity, 5);
    }

    #[tokio::test]
    async fn test_reserve_exact_stock_reaches_zero() {
        let mut product = latte();
        product
            .handle_action(ProductAction::ReserveStock(5), &())
            .await
            .unwrap();
        assert_eq!(product.stock_quantity, 0);
    }

    #[tokio::test]
    async fn test_reserve_zero_is_rejected() {
        let mut product = latte();
        let err = product
            .handle_action(ProductAction::ReserveStock(0), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductError::InvalidQuantity {
                product_id: ProductId(3),
                quantity: 0
            }
        );
    }

    #[tokio::test]
    async fn test_unrepresentable_line_total_is_rejected_untouched() {
        let mut gold = Product::new(ProductId(7), "Gold Bar", "", Decimal::MAX, 10);
        let err = gold
            .handle_action(ProductAction::ReserveStock(2), &())
            .await
            .unwrap_err();

        assert_eq!(err, ProductError::LineTotalOverflow(ProductId(7)));
        assert_eq!(gold.stock_quantity, 10);
    }

    #[tokio::test]
    async fn test_transaction_total_must_fit() {
        let mut gold = Product::new(ProductId(7), "Gold Bar", "", Decimal::MAX, 10);
        let mut coffee = latte();
        let results = vec![
            gold.handle_action(ProductAction::ReserveStock(1), &())
                .await
                .unwrap(),
            coffee
                .handle_action(ProductAction::ReserveStock(1), &())
                .await
                .unwrap(),
        ];

        assert_eq!(
            Product::check_transaction(&results),
            Err(ProductError::TotalOverflow)
        );
        assert_eq!(Product::check_transaction(&results[1..]), Ok(()));
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected() {
        let mut product = latte();
        let update = ProductUpdate {
            price: Some(dec!(-1)),
        };
        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!(product.price, dec!(4.00));

        let create = ProductCreate::new("Free", "", dec!(-0.01), 1);
        assert_eq!(
            Product::from_create_params(ProductId(9), create).unwrap_err(),
            ProductError::InvalidPrice(dec!(-0.01))
        );
    }
}
