use crate::adapters::http::{source_url, HttpFetcher};
use crate::core::estimate::estimate_cost;
use crate::core::itinerary::build_itinerary;
use crate::core::rank::{rank_hotels, rank_transport};
use crate::core::render::OutputFormat;
use crate::core::scrape::{attractions, hotels, transport};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{SourceKind, SourcePage, TripPlan, TripRequest};
use crate::utils::error::{PlannerError, Result};
use std::path::Path;
use std::time::Duration;
use url::Url;

const FETCH_ORDER: [SourceKind; 3] = [
    SourceKind::Transport,
    SourceKind::Hotels,
    SourceKind::Attractions,
];

/// Fetches the three travel sites in turn and turns them into a ranked plan.
pub struct TripPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) request: TripRequest,
    pub(crate) fetcher: HttpFetcher,
}

impl<S: Storage, C: ConfigProvider> TripPipeline<S, C> {
    pub fn new(storage: S, config: C, request: TripRequest) -> Result<Self> {
        let fetcher = HttpFetcher::new(
            config.user_agent(),
            Duration::from_secs(config.timeout_seconds()),
        )?;
        Ok(Self {
            storage,
            config,
            request,
            fetcher,
        })
    }

    fn base_url(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Transport => self.config.transport_base_url(),
            SourceKind::Hotels => self.config.hotels_base_url(),
            SourceKind::Attractions => self.config.attractions_base_url(),
        }
    }

    /// Parses one page; a missing body or a scrape failure yields an empty list.
    fn parse_page<T>(
        &self,
        page: Option<&SourcePage>,
        parse: impl FnOnce(&str) -> Result<Vec<T>>,
    ) -> Vec<T> {
        let Some(page) = page else {
            return Vec::new();
        };
        let Some(body) = page.body.as_deref() else {
            return Vec::new();
        };
        match parse(body) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("⚠️ Could not read {} results from {}: {}", page.kind, page.url, e);
                Vec::new()
            }
        }
    }

    fn formats(&self) -> Result<Vec<OutputFormat>> {
        self.config
            .output_formats()
            .iter()
            .map(|f| f.parse::<OutputFormat>())
            .collect()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TripPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SourcePage>> {
        let mut pages = Vec::with_capacity(FETCH_ORDER.len());

        for kind in FETCH_ORDER {
            let url = source_url(kind, self.base_url(kind), &self.request)?;
            let body = match self.fetcher.fetch_html(&url).await {
                Ok(body) => Some(body),
                Err(e) => {
                    tracing::warn!("⚠️ Fetching {} from {} failed: {}", kind, url, e);
                    None
                }
            };
            pages.push(SourcePage {
                kind,
                url: url.to_string(),
                body,
            });
        }

        Ok(pages)
    }

    async fn transform(&self, pages: Vec<SourcePage>) -> Result<TripPlan> {
        let page = |kind: SourceKind| pages.iter().find(|p| p.kind == kind);
        let top_n = self.config.top_n();

        let transport_base = Url::parse(self.config.transport_base_url())?;
        let routes = self.parse_page(page(SourceKind::Transport), |html| {
            transport::parse_routes(html, &transport_base)
        });
        let transports = rank_transport(routes, top_n);

        let hotels_base = Url::parse(self.config.hotels_base_url())?;
        let properties = self.parse_page(page(SourceKind::Hotels), |html| {
            hotels::parse_properties(html, &hotels_base)
        });
        let hotels = rank_hotels(properties, top_n);

        let mut found = self.parse_page(page(SourceKind::Attractions), attractions::parse_article);
        if found.is_empty() {
            found = attractions::fallback_for(
                &self.request.destination,
                self.config.fallback_attractions(),
            );
            tracing::info!(
                "Using {} fallback attractions for {}",
                found.len(),
                self.request.destination
            );
        }

        let itinerary = build_itinerary(&self.request.dates, &found);
        let estimate = estimate_cost(&transports, &hotels, self.request.dates.nights());
        found.truncate(self.config.max_attractions());

        tracing::debug!(
            "Plan has {} routes, {} hotels, {} attractions, {} days",
            transports.len(),
            hotels.len(),
            found.len(),
            itinerary.len()
        );

        Ok(TripPlan {
            request: self.request.clone(),
            transports,
            hotels,
            attractions: found,
            itinerary,
            estimate,
        })
    }

    async fn load(&self, plan: &TripPlan) -> Result<String> {
        let formats = self.formats()?;
        let first = formats.first().ok_or_else(|| PlannerError::MissingConfigError {
            field: "output.formats".to_string(),
        })?;

        for format in &formats {
            let rendered = format.render(plan)?;
            tracing::debug!(
                "Writing {} ({} bytes) to storage",
                format.file_name(),
                rendered.len()
            );
            self.storage
                .write_file(format.file_name(), rendered.as_bytes())
                .await?;
        }

        Ok(Path::new(self.config.output_path())
            .join(first.file_name())
            .to_string_lossy()
            .into_owned())
    }
}
