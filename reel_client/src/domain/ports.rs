use async_trait::async_trait;

use crate::domain::errors::TransportError;
use crate::domain::outcome::ProviderReply;
use crate::domain::wheel::TweenSegment;

// The machine and controller depend on these traits, not on the concrete
// HTTP client or tween implementation.

// Port for fetching one spin outcome. May suspend for seconds.
#[async_trait]
pub trait OutcomeProvider: Send + Sync {
    async fn request_outcome(&self) -> Result<ProviderReply, TransportError>;
}

// Port for the external tween engine that turns the reel.
#[async_trait]
pub trait TweenEngine: Send + Sync {
    /// Tweens from `from` to `segment.to` and resolves once the segment's
    /// duration has elapsed. The rotation must end exactly on `segment.to`.
    async fn run(&self, from: f64, segment: TweenSegment);
}
