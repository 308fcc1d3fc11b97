pub mod filter;
pub mod list;

pub use filter::HouseFilter;
pub use list::{FetchTicket, ListView, ViewState};
