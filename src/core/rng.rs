//! Seedable demo data: a 64-bit LCG feeding Box-Muller normals.
//! Avoids rand dependency

use std::f64::consts::TAU;

use crate::core::{error::SeriesError, series::Series};

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const INCREMENT: u64 = 1_442_695_040_888_963_407;

#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    #[must_use]
    pub const fn seed(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeded from the wall clock; a fixed seed if the clock is before 1970.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0x2545_F491_4F6C_DD1D, |d| d.as_nanos() as u64);
        Self::seed(nanos)
    }

    #[inline]
    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Uniform in `(0, 1]`, from the top 53 bits.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn unit(&mut self) -> f64 {
        ((self.step() >> 11) + 1) as f64 / (1u64 << 53) as f64
    }

    /// Standard normal 𝒩(0, 1) sample.
    #[inline]
    pub fn randn(&mut self) -> f64 {
        let (u1, u2) = (self.unit(), self.unit());
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }

    /// `steps` positions of a Gaussian random walk starting at zero.
    pub fn random_walk(&mut self, steps: usize, sigma: f64) -> Vec<f64> {
        let mut pos = 0.0;
        (0..steps)
            .map(|i| {
                if i > 0 {
                    pos += sigma * self.randn();
                }
                pos
            })
            .collect()
    }

    /// The `demo` pair: a random walk and a two-period sine scaled to the
    /// walk's largest excursion, both over `0..steps`.
    pub fn demo_series(&mut self, steps: usize, sigma: f64) -> Result<(Series, Series), SeriesError> {
        let walk = self.random_walk(steps, sigma);
        let amplitude = walk.iter().fold(1.0_f64, |m, v| m.max(v.abs()));
        #[allow(clippy::cast_precision_loss)]
        let (x, period): (Vec<f64>, f64) = (
            (0..steps).map(|i| i as f64).collect(),
            steps as f64 / 2.0,
        );
        let wave = x.iter().map(|t| amplitude * (t * TAU / period).sin()).collect();
        Ok((Series::new(x.clone(), wave)?, Series::new(x, walk)?))
    }
}
