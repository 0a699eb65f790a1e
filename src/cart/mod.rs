//! Cart

mod line_item;
mod manager;

pub use line_item::CartLineItem;
pub use manager::CartManager;
