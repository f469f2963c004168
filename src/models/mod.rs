pub mod itinerary;
pub mod record_id;
pub mod trip_preference;
