pub mod associate;
pub mod dataset;
pub mod errors;
pub mod facets;
pub mod filter;
pub mod input;
pub mod locale;
pub mod record;
