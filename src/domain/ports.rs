use crate::domain::model::{SourcePage, TripPlan};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn transport_base_url(&self) -> &str;
    fn hotels_base_url(&self) -> &str;
    fn attractions_base_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn top_n(&self) -> usize;
    fn max_attractions(&self) -> usize;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];

    /// Extra per-city attraction lists, consulted before the built-in table.
    fn fallback_attractions(&self) -> Option<&HashMap<String, Vec<String>>> {
        None
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourcePage>>;
    async fn transform(&self, pages: Vec<SourcePage>) -> Result<TripPlan>;
    async fn load(&self, plan: &TripPlan) -> Result<String>;
}
