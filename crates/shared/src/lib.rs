pub mod filter;
pub mod geo;
pub mod links;
pub mod models;
