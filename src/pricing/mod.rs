//! Material pricing: the unit price table and where it comes from

pub mod provider;
pub mod table;

pub use provider::{FilePriceProvider, FnPriceProvider, PriceProvider, StaticPriceProvider};
pub use table::{Material, PriceTable};
