//! Page-level components for the birthday trip.

mod nav_header;
mod panels;

pub use nav_header::NavHeader;
pub use panels::{FoodPanel, HotelPanel, ItineraryPanel, NoticePanel};
