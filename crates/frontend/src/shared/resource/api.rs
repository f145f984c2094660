use async_trait::async_trait;
use contracts::domain::common::Resource;
use contracts::shared::envelope::unwrap_list;
use contracts::shared::lookup::{options_from_rows, LookupOption, LookupSource, Lookups};
use futures::future::join_all;
use serde_json::Value;
use std::marker::PhantomData;

use crate::shared::api_utils::{self, ApiError};

/// CRUD calls against one backend collection.
///
/// The page controller only talks to this trait, so tests can swap the
/// HTTP client for an in-memory backend.
#[async_trait(?Send)]
pub trait ResourceApi<R: Resource> {
    async fn list(&self) -> Result<Vec<R>, ApiError>;
    /// The caller re-fetches afterwards, so no entity is read back.
    async fn create(&self, payload: &R::Payload) -> Result<(), ApiError>;
    async fn update(&self, id: i64, payload: &R::Payload) -> Result<(), ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// REST client for `R::ENDPOINT`.
pub struct HttpResource<R>(PhantomData<R>);

impl<R> HttpResource<R> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for HttpResource<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl<R: Resource> ResourceApi<R> for HttpResource<R> {
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        let body = api_utils::get_json(R::ENDPOINT).await?;
        Ok(unwrap_list(body)?)
    }

    async fn create(&self, payload: &R::Payload) -> Result<(), ApiError> {
        api_utils::post_json(R::ENDPOINT, payload).await?;
        log::info!("{}: created", R::KEY);
        Ok(())
    }

    async fn update(&self, id: i64, payload: &R::Payload) -> Result<(), ApiError> {
        api_utils::put_json(&R::item_path(id), payload).await?;
        log::info!("{}: updated #{}", R::KEY, id);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        api_utils::delete(&R::item_path(id)).await?;
        log::info!("{}: deleted #{}", R::KEY, id);
        Ok(())
    }
}

pub async fn fetch_lookup(source: LookupSource) -> Result<Vec<LookupOption>, ApiError> {
    let body = api_utils::get_json(source.endpoint).await?;
    let rows: Vec<Value> = unwrap_list(body)?;
    Ok(options_from_rows(&rows, source.label_fields))
}

/// Fetches every lookup concurrently. A failed source leaves its select empty.
pub async fn fetch_lookups(sources: Vec<LookupSource>) -> Lookups {
    let results = join_all(sources.iter().map(|s| fetch_lookup(*s))).await;
    let mut lookups = Lookups::default();
    for (source, result) in sources.into_iter().zip(results) {
        match result {
            Ok(options) => lookups.insert(source.key, options),
            Err(e) => {
                log::warn!("lookup {} failed: {}", source.key, e);
                lookups.insert(source.key, Vec::new());
            }
        }
    }
    lookups
}
