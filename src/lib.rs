pub mod cli;
pub mod listing;
pub mod logging;

pub use listing::{
    map_lister, map_listing, Lister, Listing, MappingError, PriceCategory, PriceInfo, Prices,
};

#[cfg(test)]
mod tests;
