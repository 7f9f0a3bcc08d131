use crate::domain::{SymbolId, WheelGeometry};
use crate::interface_adapters::assets::SymbolAtlas;

/// Distance of symbol centres from the wheel hub, in pixels.
pub const REEL_RADIUS: f64 = 150.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolPlacement {
    pub symbol_id: SymbolId,
    pub x: f64,
    pub y: f64,
    // Counter-rotation so each symbol faces outwards.
    pub rotation: f64,
}

/// Everything needed to draw the reel at one rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReelFrame {
    pub rotation: f64,
    pub under_pointer: SymbolId,
    pub placements: Vec<SymbolPlacement>,
}

/// Headless reel renderer. Without an atlas it renders nothing.
pub struct ReelView {
    geometry: WheelGeometry,
    atlas: Option<SymbolAtlas>,
}

impl ReelView {
    pub fn new(geometry: WheelGeometry, atlas: Option<SymbolAtlas>) -> Self {
        Self { geometry, atlas }
    }

    pub fn frame(&self, rotation: f64) -> Option<ReelFrame> {
        let atlas = self.atlas.as_ref()?;

        let placements = (0..self.geometry.symbol_count)
            .map(SymbolId::new)
            .filter(|symbol| atlas.image(*symbol).is_some())
            .map(|symbol_id| {
                let angle = self.geometry.symbol_angle(symbol_id);
                SymbolPlacement {
                    symbol_id,
                    x: angle.cos() * REEL_RADIUS,
                    y: angle.sin() * REEL_RADIUS,
                    rotation: -angle,
                }
            })
            .collect();

        Some(ReelFrame {
            rotation,
            under_pointer: self.geometry.symbol_under_pointer(rotation),
            placements,
        })
    }
}
