pub mod date_range;
pub mod document_serializer;
pub mod itinerary_generation_service;
pub mod itinerary_service;
