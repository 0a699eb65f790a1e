//! Notices
//!
//! Transient, non-blocking messages reporting why a cart operation did not
//! go through. Cart operations never return errors to their caller; they hand
//! a [`Notice`] to the injected [`Notifier`] and leave the cart untouched.

use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::warn;

use crate::products::ProductId;

/// Why a cart operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Notice {
    /// The requested quantity exceeds the stock available at query time.
    #[error("requested quantity of product {product} is out of stock")]
    OutOfStock {
        /// Product the quantity was requested for
        product: ProductId,
    },

    /// Fetching stock or product details, or saving the cart, failed while adding.
    #[error("failed to add product {product} to the cart")]
    AdditionFailed {
        /// Product being added
        product: ProductId,
    },

    /// The product is not in the cart, or the cart could not be saved.
    #[error("failed to remove product {product} from the cart")]
    RemovalFailed {
        /// Product being removed
        product: ProductId,
    },

    /// The product is not in the cart, or the stock check or save failed.
    #[error("failed to update the quantity of product {product}")]
    UpdateFailed {
        /// Product being updated
        product: ProductId,
    },
}

impl Notice {
    /// The product the rejected operation targeted.
    pub fn product(&self) -> ProductId {
        match self {
            Self::OutOfStock { product }
            | Self::AdditionFailed { product }
            | Self::RemovalFailed { product }
            | Self::UpdateFailed { product } => *product,
        }
    }
}

/// Receives notices emitted by cart operations.
pub trait Notifier: Send + Sync {
    /// Surface a notice to the user.
    fn notify(&self, notice: &Notice);
}

/// Notifier that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        warn!(product = %notice.product(), "{notice}");
    }
}

/// Notifier that keeps every notice in memory until drained.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices recorded so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns every recorded notice.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: &Notice) {
        warn!(product = %notice.product(), "{notice}");

        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*notice);
    }
}
