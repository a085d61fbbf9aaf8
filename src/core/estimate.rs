use crate::domain::model::{CostEstimate, HotelOption, TransportOption};

/// Naive total: the top priced route plus the top priced hotel.
///
/// Hotel search results carry check-in and check-out dates, so the listed hotel price
/// already covers the whole stay.
pub fn estimate_cost(
    transports: &[TransportOption],
    hotels: &[HotelOption],
    nights: u32,
) -> Option<CostEstimate> {
    let transport = transports.iter().find_map(|t| t.price_value);
    let lodging = hotels.iter().find_map(|h| h.price_value);

    if transport.is_none() && lodging.is_none() {
        return None;
    }

    Some(CostEstimate {
        transport,
        lodging,
        total: transport.unwrap_or(0.0) + lodging.unwrap_or(0.0),
        nights,
    })
}
