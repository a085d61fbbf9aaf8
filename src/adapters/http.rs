use crate::domain::model::{SourceKind, TripRequest};
use crate::utils::error::{PlannerError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper over `reqwest` that always sends a browser-like user agent.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub async fn fetch_html(&self, url: &Url) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("{} responded with {}", url, response.status());

        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

fn with_segments(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| PlannerError::InvalidConfigValueError {
            field: "sources".to_string(),
            value: base.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `{base}/search/{origin}/{destination}?departureDate={start}`
pub fn transport_search_url(base: &str, request: &TripRequest) -> Result<Url> {
    let mut url = with_segments(base, &["search", request.origin.as_str(), request.destination.as_str()])?;
    url.query_pairs_mut()
        .append_pair("departureDate", &request.dates.start_str());
    Ok(url)
}

/// `{base}/searchresults.html?dest_type=city&dest_id=-{destination}&checkin=..&checkout=..`
pub fn hotel_search_url(base: &str, request: &TripRequest) -> Result<Url> {
    let mut url = with_segments(base, &["searchresults.html"])?;
    url.query_pairs_mut()
        .append_pair("dest_type", "city")
        .append_pair("dest_id", &format!("-{}", request.destination))
        .append_pair("checkin", &request.dates.start_str())
        .append_pair("checkout", &request.dates.end_str());
    Ok(url)
}

/// `{base}/wiki/{Destination_Title}`
pub fn article_url(base: &str, request: &TripRequest) -> Result<Url> {
    let title = request.destination.replace(' ', "_");
    with_segments(base, &["wiki", title.as_str()])
}

pub fn source_url(kind: SourceKind, base: &str, request: &TripRequest) -> Result<Url> {
    match kind {
        SourceKind::Transport => transport_search_url(base, request),
        SourceKind::Hotels => hotel_search_url(base, request),
        SourceKind::Attractions => article_url(base, request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DateRange;

    fn request() -> TripRequest {
        TripRequest::new(
            "New York",
            "Paris",
            DateRange::parse("2025-08-01 to 2025-08-07").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_transport_search_url() {
        let url = transport_search_url("https://www.rome2rio.com", &request()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.rome2rio.com/search/New%20York/Paris?departureDate=2025-08-01"
        );
    }

    #[test]
    fn test_hotel_search_url() {
        let url = hotel_search_url("https://www.booking.com/", &request()).unwrap();
        assert_eq!(url.path(), "/searchresults.html");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("dest_id".to_string(), "-Paris".to_string())));
        assert!(pairs.contains(&("checkout".to_string(), "2025-08-07".to_string())));
    }

    #[test]
    fn test_article_url_uses_underscores() {
        let mut req = request();
        req.destination = "New York City".to_string();
        let url = article_url("https://en.wikipedia.org", &req).unwrap();
        assert_eq!(url.as_str(), "https://en.wikipedia.org/wiki/New_York_City");
    }

    #[test]
    fn test_bad_base_url() {
        assert!(transport_search_url("not a url", &request()).is_err());
        assert!(transport_search_url("mailto:travel@example.com", &request()).is_err());
    }
}
