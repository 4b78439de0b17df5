use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default centre-to-centre separation between placed items, in scene units.
pub const DEFAULT_MIN_SEPARATION: f32 = 3.0;

/// Default number of placement attempts before an item is skipped.
pub const DEFAULT_MAX_ATTEMPTS_PER_ITEM: u32 = 50;

/// Axis-aligned rectangle items may be placed in.
///
/// The region is the final placeable area: any edge padding has already been
/// applied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRegion {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl PlacementRegion {
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Builds the placeable area for a centred rectangular floor, shrunk on
    /// every side by `padding`. Every corpus scene derives its region this
    /// way, so the convenience lives here.
    pub fn floor_with_padding(width: f32, depth: f32, padding: f32) -> Self {
        Self {
            min_x: -(width / 2.0) + padding,
            max_x: (width / 2.0) - padding,
            min_z: -(depth / 2.0) + padding,
            max_z: (depth / 2.0) - padding,
        }
    }

    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> (f32, f32) {
        (
            sample_uniform(rng, self.min_x, self.max_x),
            sample_uniform(rng, self.min_z, self.max_z),
        )
    }
}

/// How the required distance between two items is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SeparationRule {
    /// A constant centre-to-centre distance regardless of item size. This is
    /// the rule the original scatter ships with; `FixedMinimum(0.0)` is the
    /// degenerate accept-everything configuration, not a separate code path.
    FixedMinimum(f32),
    /// The sum of the two items' radii, so larger props demand more space.
    RadiusSum,
}

impl Default for SeparationRule {
    fn default() -> Self {
        SeparationRule::FixedMinimum(DEFAULT_MIN_SEPARATION)
    }
}

/// Configuration for [`NonOverlappingPlacer`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// Candidate radius is drawn uniformly from this inclusive range.
    pub radius_range: (f32, f32),
    pub separation: SeparationRule,
    pub max_attempts_per_item: u32,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            // Half of the original's 2.5-unit prop width, scaled 0.8-1.2.
            radius_range: (1.0, 1.5),
            separation: SeparationRule::default(),
            max_attempts_per_item: DEFAULT_MAX_ATTEMPTS_PER_ITEM,
        }
    }
}

/// One accepted placement: position, the radius used for separation, and the
/// yaw the prop should be instantiated with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub x: f32,
    pub z: f32,
    pub radius: f32,
    /// Rotation about the vertical axis, radians in `[0, 2π)`.
    pub rotation: f32,
}

/// Outcome of one placement batch. Items appear in insertion order; a
/// shortfall is a normal, reportable result rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacementBatch {
    pub items: Vec<PlacedItem>,
    /// Items that exhausted their attempt budget and were dropped.
    pub skipped: usize,
}

impl PlacementBatch {
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

/// Best-effort scatter of non-overlapping positions inside a region.
///
/// Each item draws a radius, then retries random candidates until one
/// satisfies the separation rule against everything accepted so far or the
/// attempt budget runs out. Exhausted items are skipped with a warning; the
/// placer never shrinks the region or relaxes the rule to force a fit, since
/// a decorative scatter does not require full packing.
///
/// Output is fully determined by the supplied [`Rng`]; a seeded source
/// reproduces a batch exactly.
#[derive(Debug, Clone, Default)]
pub struct NonOverlappingPlacer {
    config: PlacerConfig,
}

impl NonOverlappingPlacer {
    /// Creates a placer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a placer with an explicit configuration.
    pub fn with_config(config: PlacerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }

    /// Places up to `count` items inside `region`.
    pub fn place<R: Rng>(
        &self,
        region: &PlacementRegion,
        count: usize,
        rng: &mut R,
    ) -> PlacementBatch {
        let mut batch = PlacementBatch {
            items: Vec::with_capacity(count),
            skipped: 0,
        };

        for index in 0..count {
            let (min_radius, max_radius) = self.config.radius_range;
            let radius = sample_uniform(rng, min_radius, max_radius);
            match self.place_one(region, radius, &batch.items, rng) {
                Some(item) => batch.items.push(item),
                None => {
                    batch.skipped += 1;
                    tracing::warn!(
                        item = index + 1,
                        attempts = self.config.max_attempts_per_item,
                        "could not place item within attempt budget"
                    );
                }
            }
        }

        batch
    }

    /// Attempts to place a single item of the given radius against an
    /// already-accepted set. Used by the prop scatter, which draws radii from
    /// sprite sizes instead of the configured range.
    pub(crate) fn place_one<R: Rng>(
        &self,
        region: &PlacementRegion,
        radius: f32,
        accepted: &[PlacedItem],
        rng: &mut R,
    ) -> Option<PlacedItem> {
        for _ in 0..self.config.max_attempts_per_item {
            let (x, z) = region.sample(rng);
            let rotation = rng.gen_range(0.0..std::f32::consts::TAU);

            let overlaps = accepted
                .iter()
                .any(|existing| !self.far_enough(x, z, radius, existing));
            if !overlaps {
                return Some(PlacedItem {
                    x,
                    z,
                    radius,
                    rotation,
                });
            }
        }
        None
    }

    fn far_enough(&self, x: f32, z: f32, radius: f32, existing: &PlacedItem) -> bool {
        let dx = x - existing.x;
        let dz = z - existing.z;
        let distance = (dx * dx + dz * dz).sqrt();
        let required = match self.config.separation {
            SeparationRule::FixedMinimum(min) => min,
            SeparationRule::RadiusSum => radius + existing.radius,
        };
        distance >= required
    }
}

/// Uniform sample over `[min, max]`, tolerating a degenerate empty range.
fn sample_uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}
