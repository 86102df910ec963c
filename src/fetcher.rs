use std::sync::Arc;
use std::time::Duration;

use crate::cache::{Lookup, TtlCache};
use crate::error::GrandPrizeError;
use crate::model::GrandPrizeResult;
use crate::upstream::UpstreamClient;

pub const POWERBALL: &str = "powerball";
pub const MEGA_MILLIONS: &str = "mega-millions";

pub const GRAND_PRIZE_TTL: Duration = Duration::from_secs(60); // 1 minute

pub fn cache_key(game: &str) -> String {
    format!("{game}-grand-prize")
}

/// Cache-aside lookup of grand prizes: serve a fresh cached value, otherwise
/// ask upstream and remember the answer for `ttl`.
///
/// Upstream failures are returned as-is and never cached. Concurrent misses
/// on the same key may each call upstream; the last writer wins.
pub struct GrandPrizeFetcher {
    cache: Arc<TtlCache<GrandPrizeResult>>,
    upstream: Arc<dyn UpstreamClient>,
    ttl: Duration,
}

impl GrandPrizeFetcher {
    pub fn new(cache: Arc<TtlCache<GrandPrizeResult>>, upstream: Arc<dyn UpstreamClient>) -> Self {
        Self::with_ttl(cache, upstream, GRAND_PRIZE_TTL)
    }

    pub fn with_ttl(
        cache: Arc<TtlCache<GrandPrizeResult>>,
        upstream: Arc<dyn UpstreamClient>,
        ttl: Duration,
    ) -> Self {
        Self {
            cache,
            upstream,
            ttl,
        }
    }

    pub async fn fetch_grand_prize(&self, game: &str) -> Result<GrandPrizeResult, GrandPrizeError> {
        let key = cache_key(game);

        match self.cache.lookup(&key) {
            Lookup::Fresh(result) => {
                log::info!("{game} data retrieved from in-memory cache.");
                return Ok(result);
            }
            Lookup::Expired(_) => log::debug!("Cache entry for {key} expired"),
            Lookup::Missing => log::debug!("Cache miss for {key}"),
        }

        let result = self.upstream.fetch(game).await?;
        self.cache.set(&key, result.clone(), self.ttl);
        Ok(result)
    }
}
