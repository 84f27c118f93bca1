mod mapper;
mod mapping_error;
mod models;
pub mod parse;
pub mod raw;
pub mod value;

pub use mapper::{build_prices, map_lister, map_listing};
pub use mapping_error::MappingError;
pub(crate) use mapping_error::json_type_name;
pub use models::{Lister, Listing, PriceCategory, PriceInfo, Prices};
