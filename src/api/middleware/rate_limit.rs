//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

use crate::config::Config;

type PortalGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the per-client rate limiter applied to the whole portal.
///
/// # Limits
///
/// - **Refill**: one token every `RATE_LIMIT_PER_SECOND` seconds (default 2)
/// - **Burst**: `RATE_LIMIT_BURST` (default 100)
///
/// Requests exceeding the limit receive `429 Too Many Requests`. This slows
/// credential guessing across accounts; the per-account lockout is enforced
/// separately by the auth service.
///
/// # Key Extraction
///
/// Limits are keyed by the socket peer address, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Panics
///
/// If either limit is zero. [`Config::validate`] rejects that at startup.
pub fn layer(config: &Config) -> PortalGovernorLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .expect("rate limit quota must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
