use crate::domain::model::{HotelOption, TransportOption};
use std::cmp::Ordering;

/// Orders `Some` values by `cmp`, with `None` after every `Some`.
fn none_last(a: Option<f64>, b: Option<f64>, cmp: impl Fn(f64, f64) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Cheapest first; unpriced routes last. Keeps the first `n`.
pub fn rank_transport(mut options: Vec<TransportOption>, n: usize) -> Vec<TransportOption> {
    options.sort_by(|a, b| none_last(a.price_value, b.price_value, |x, y| x.total_cmp(&y)));
    options.truncate(n);
    options
}

/// Best rating per unit of price first; hotels without a usable price last. Keeps the first `n`.
pub fn rank_hotels(mut options: Vec<HotelOption>, n: usize) -> Vec<HotelOption> {
    options.sort_by(|a, b| none_last(a.value_score(), b.value_score(), |x, y| y.total_cmp(&x)));
    options.truncate(n);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(mode: &str, price: Option<f64>) -> TransportOption {
        TransportOption {
            mode: mode.to_string(),
            price: price.map(|p| format!("${}", p)).unwrap_or_else(|| "N/A".to_string()),
            price_value: price,
            link: "https://www.rome2rio.com/".to_string(),
        }
    }

    fn hotel(name: &str, price: Option<f64>, rating: Option<f64>) -> HotelOption {
        HotelOption {
            name: name.to_string(),
            price: String::new(),
            price_value: price,
            rating: String::new(),
            rating_value: rating,
            link: String::new(),
        }
    }

    fn modes(options: &[TransportOption]) -> Vec<&str> {
        options.iter().map(|o| o.mode.as_str()).collect()
    }

    fn names(options: &[HotelOption]) -> Vec<&str> {
        options.iter().map(|o| o.name.as_str()).collect()
    }

    #[test]
    fn test_rank_transport_cheapest_first() {
        let ranked = rank_transport(
            vec![
                route("Fly", Some(450.0)),
                route("Unknown", None),
                route("Bus", Some(80.0)),
                route("Train", Some(120.0)),
                route("Drive", Some(300.0)),
            ],
            3,
        );
        assert_eq!(modes(&ranked), vec!["Bus", "Train", "Drive"]);
    }

    #[test]
    fn test_rank_transport_unpriced_last_and_stable() {
        let ranked = rank_transport(
            vec![route("A", None), route("B", Some(10.0)), route("C", None)],
            5,
        );
        assert_eq!(modes(&ranked), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_rank_hotels_best_value_first() {
        let ranked = rank_hotels(
            vec![
                hotel("Pricey", Some(900.0), Some(9.5)),
                hotel("Bargain", Some(100.0), Some(7.0)),
                hotel("Unpriced", None, Some(10.0)),
                hotel("Middle", Some(300.0), Some(9.0)),
            ],
            3,
        );
        assert_eq!(names(&ranked), vec!["Bargain", "Middle", "Pricey"]);
    }

    #[test]
    fn test_rank_hotels_unrated_sorts_below_rated() {
        let ranked = rank_hotels(
            vec![
                hotel("Free", Some(0.0), Some(9.0)),
                hotel("Unrated", Some(50.0), None),
                hotel("Rated", Some(500.0), Some(6.0)),
            ],
            3,
        );
        assert_eq!(names(&ranked), vec!["Rated", "Unrated", "Free"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_transport(Vec::new(), 3).is_empty());
        assert!(rank_hotels(Vec::new(), 3).is_empty());
    }
}
