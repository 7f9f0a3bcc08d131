use crate::domain::{AssetLoadError, SymbolId};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Symbol images relative to the asset directory, indexed by symbol id.
pub const SYMBOL_ASSETS: [&str; 8] = [
    "symbols/symbo1.png",
    "symbols/symbo2.png",
    "symbols/symbo3.png",
    "symbols/symbo4.png",
    "symbols/symbo5.png",
    "symbols/symbo6.png",
    "symbols/symbo7.png",
    "symbols/symbo8.png",
];

/// Relative image path for `symbol`, if one is configured.
pub fn symbol_asset(symbol: SymbolId) -> Option<&'static str> {
    SYMBOL_ASSETS.get(symbol.index() as usize).copied()
}

#[derive(Debug, Clone)]
pub struct SymbolImage {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Loaded images for every symbol on the reel.
#[derive(Debug, Clone)]
pub struct SymbolAtlas {
    images: Vec<SymbolImage>,
}

impl SymbolAtlas {
    /// Reads the first `symbol_count` images under `dir`. Any missing or
    /// unreadable file fails the whole atlas.
    pub async fn load(dir: &Path, symbol_count: u32) -> Result<Self, AssetLoadError> {
        let paths = SYMBOL_ASSETS.iter().take(symbol_count as usize);
        if symbol_count == 0 || paths.len() < symbol_count as usize {
            return Err(AssetLoadError::Unconfigured);
        }

        let mut images = Vec::with_capacity(symbol_count as usize);
        for relative in paths {
            let path = dir.join(relative);
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|source| AssetLoadError::Io {
                    path: path.clone(),
                    source,
                })?;
            images.push(SymbolImage { path, bytes });
        }

        debug!(count = images.len(), dir = %dir.display(), "symbol assets loaded");
        Ok(Self { images })
    }

    pub fn image(&self, symbol: SymbolId) -> Option<&SymbolImage> {
        self.images.get(symbol.index() as usize)
    }
}

/// Loads the atlas, reporting failure instead of propagating it: the game
/// keeps running and the reel simply does not render.
pub async fn load_or_degrade(dir: &Path, symbol_count: u32) -> Option<SymbolAtlas> {
    match SymbolAtlas::load(dir, symbol_count).await {
        Ok(atlas) => Some(atlas),
        Err(e) => {
            warn!(error = %e, "symbol assets unavailable; reel will not render");
            None
        }
    }
}
