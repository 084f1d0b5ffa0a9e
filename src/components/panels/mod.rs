//! One component per tab. Each renders the immutable record set returned by
//! `trip_core::content_for`.

mod food;
mod hotel;
mod itinerary;
mod notice;

pub use food::FoodPanel;
pub use hotel::HotelPanel;
pub use itinerary::ItineraryPanel;
pub use notice::NoticePanel;
