use crate::domain::{RandomSource, SpinDraw, SpinSettings};

// Spin use case with the random source injected.
pub struct SpinUseCase<R> {
    pub random: R,
    pub settings: SpinSettings,
}

impl<R> SpinUseCase<R>
where
    R: RandomSource,
{
    /// Picks a symbol and a delay without waiting.
    pub fn draw(&self) -> SpinDraw {
        let symbol_id = self.random.pick_symbol(self.settings.symbol_count);
        let delay_seconds = self.random.pick_delay(
            self.settings.min_delay_seconds,
            self.settings.max_delay_seconds,
        );

        SpinDraw {
            // The source is a port; never hand out an index the reel does not have.
            symbol_id: symbol_id.min(self.settings.symbol_count.saturating_sub(1)),
            delay_seconds: delay_seconds
                .clamp(self.settings.min_delay_seconds, self.settings.max_delay_seconds),
        }
    }

    /// Draws, then holds the result for the drawn delay.
    pub async fn execute(&self) -> SpinDraw {
        let draw = self.draw();
        tracing::debug!(
            symbol_id = draw.symbol_id,
            delay_seconds = draw.delay_seconds,
            "spin drawn; holding response"
        );
        tokio::time::sleep(draw.delay()).await;
        draw
    }
}
