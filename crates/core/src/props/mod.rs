use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::placement::{NonOverlappingPlacer, PlacedItem, PlacementRegion};
use crate::{PigeonSmashError, Result};

/// A decorative billboard sprite that can be scattered around the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropSprite {
    pub name: String,
    pub base_width: f32,
    pub base_height: f32,
}

impl PropSprite {
    pub fn new(name: impl Into<String>, base_width: f32, base_height: f32) -> Self {
        Self {
            name: name.into(),
            base_width,
            base_height,
        }
    }
}

/// Scatter parameters: how many props to place and how much their size may
/// vary around the sprite's base dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScatterConfig {
    pub count: usize,
    /// Per-item scale drawn uniformly from this inclusive range.
    pub scale_range: (f32, f32),
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 8,
            scale_range: (0.8, 1.2),
        }
    }
}

/// One scattered prop: the chosen sprite, its sampled scale, and the accepted
/// placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedProp {
    pub sprite: String,
    pub scale: f32,
    pub item: PlacedItem,
}

/// Outcome of a prop scatter, mirroring [`crate::placement::PlacementBatch`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScatterBatch {
    pub props: Vec<PlacedProp>,
    pub skipped: usize,
}

/// Registry of the sprites available to the scatter.
#[derive(Debug, Clone, Default)]
pub struct PropCatalog {
    sprites: Vec<PropSprite>,
}

impl PropCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six ruin billboards the original scene decorates itself with.
    pub fn demo_ruins() -> Self {
        let mut catalog = Self::new();
        for name in [
            "blue_gray_ruins2",
            "blue_gray_ruins3",
            "brown_ruins2",
            "white_ruins3",
            "yellow_ruins2",
            "yellow_ruins3",
        ] {
            catalog.register(PropSprite::new(name, 2.5, 3.5));
        }
        catalog
    }

    pub fn register(&mut self, sprite: PropSprite) {
        self.sprites.push(sprite);
    }

    pub fn sprites(&self) -> &[PropSprite] {
        &self.sprites
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Scatters `config.count` props inside `region`: each item picks a
    /// sprite and a scale uniformly, derives its separation radius from the
    /// scaled sprite width, and is placed through `placer`. Items that
    /// exhaust the attempt budget are counted in `skipped`.
    pub fn scatter<R: Rng>(
        &self,
        placer: &NonOverlappingPlacer,
        region: &PlacementRegion,
        config: &ScatterConfig,
        rng: &mut R,
    ) -> Result<ScatterBatch> {
        if self.sprites.is_empty() {
            return Err(PigeonSmashError::invalid_input(
                "prop catalog is empty, nothing to scatter",
            ));
        }

        let mut batch = ScatterBatch::default();
        let mut accepted: Vec<PlacedItem> = Vec::with_capacity(config.count);

        for _ in 0..config.count {
            let sprite = &self.sprites[rng.gen_range(0..self.sprites.len())];
            let (min_scale, max_scale) = config.scale_range;
            let scale = if max_scale > min_scale {
                rng.gen_range(min_scale..=max_scale)
            } else {
                min_scale
            };
            let radius = sprite.base_width * scale / 2.0;

            match placer.place_one(region, radius, &accepted, rng) {
                Some(item) => {
                    accepted.push(item);
                    batch.props.push(PlacedProp {
                        sprite: sprite.name.clone(),
                        scale,
                        item,
                    });
                }
                None => batch.skipped += 1,
            }
        }

        if batch.skipped > 0 {
            tracing::warn!(
                skipped = batch.skipped,
                requested = config.count,
                "prop scatter could not place every item"
            );
        }

        Ok(batch)
    }
}
