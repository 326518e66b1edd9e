use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{TumbleError, TumbleResult};

/// Colors drawn when a palette does not say otherwise.
pub const DEFAULT_PALETTE_LEN: usize = 4;

/// Upper bound on palette length.
pub const MAX_PALETTE_LEN: usize = 256;

/// How face colors are chosen for a run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaletteSpec {
    /// `count` uniformly random opaque colors. A seed makes the draw reproducible.
    Random {
        /// Number of colors.
        count: usize,
        /// Optional RNG seed; OS entropy is used when absent.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Explicit colors, used in order.
    Fixed {
        /// Colors paired with faces in declaration order.
        colors: Vec<Rgb8>,
    },
}

impl Default for PaletteSpec {
    fn default() -> Self {
        Self::Random {
            count: DEFAULT_PALETTE_LEN,
            seed: None,
        }
    }
}

impl PaletteSpec {
    /// Number of colors this palette produces.
    pub fn len(&self) -> usize {
        match self {
            Self::Random { count, .. } => *count,
            Self::Fixed { colors } => colors.len(),
        }
    }

    /// `true` when no color would be produced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the palette length against `1..=MAX_PALETTE_LEN`.
    pub fn validate(&self) -> TumbleResult<()> {
        match self.len() {
            0 => Err(TumbleError::validation(
                "palette must contain at least one color",
            )),
            n if n > MAX_PALETTE_LEN => Err(TumbleError::validation(format!(
                "palette has {n} colors, the maximum is {MAX_PALETTE_LEN}"
            ))),
            _ => Ok(()),
        }
    }

    /// Draw the colors. Random palettes are sampled once per call.
    pub fn resolve(&self) -> TumbleResult<Vec<Rgb8>> {
        self.validate()?;
        Ok(match self {
            Self::Random {
                count,
                seed: Some(seed),
            } => random_palette(&mut StdRng::seed_from_u64(*seed), *count),
            Self::Random { count, seed: None } => random_palette(&mut rand::thread_rng(), *count),
            Self::Fixed { colors } => colors.clone(),
        })
    }
}

/// `count` colors with every channel drawn uniformly from `0..=255`.
pub fn random_palette<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Rgb8> {
    (0..count)
        .map(|_| {
            Rgb8::new(
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/config/palette.rs"]
mod tests;
