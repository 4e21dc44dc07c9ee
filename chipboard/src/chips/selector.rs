// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Weighted random selection of chip variants.
use log::trace;

use crate::{
    board::BuildError,
    chips::{ChipCatalog, ChipId, ChipVariant},
};

/// Source of uniformly distributed integers. This is the only source of randomness used
/// while building a board, so a seeded implementation makes builds reproducible.
pub trait UniformIntSource {
    /// Return a value uniformly distributed in `[0, bound)`. `bound` is never 0.
    fn below(&mut self, bound: u32) -> u32;
}

#[cfg(feature = "rng_gen")]
impl<R: rand::Rng + ?Sized> UniformIntSource for R {
    fn below(&mut self, bound: u32) -> u32 {
        self.gen_range(0, bound)
    }
}

/// Adapts a closure into a [`UniformIntSource`]. The closure receives the bound and must
/// return a value below it.
#[derive(Debug, Clone)]
pub struct FromFn<F>(pub F);

impl<F: FnMut(u32) -> u32> UniformIntSource for FromFn<F> {
    fn below(&mut self, bound: u32) -> u32 {
        (self.0)(bound)
    }
}

/// Draws chip variants in proportion to their weights in a [`ChipCatalog`].
#[derive(Debug, Clone)]
pub struct WeightedSelector<'c, I> {
    /// Variants in the catalog's declared order.
    variants: &'c [ChipVariant<I>],

    /// Running total of weights, parallel to `variants`.
    cumulative: Vec<u32>,
}

impl<'c, I: ChipId> WeightedSelector<'c, I> {
    /// Precompute the cumulative weights of the catalog. Fails if no variant can be
    /// selected or the weights overflow.
    pub fn new(catalog: &'c ChipCatalog<I>) -> Result<Self, BuildError> {
        let mut total = 0u32;
        let mut cumulative = Vec::with_capacity(catalog.len());
        for variant in catalog.variants() {
            total = total
                .checked_add(variant.weight())
                .ok_or(BuildError::WeightOverflow)?;
            cumulative.push(total);
        }
        if total == 0 {
            return Err(BuildError::EmptyCatalog);
        }
        Ok(Self {
            variants: catalog.variants(),
            cumulative,
        })
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u32 {
        // new() guarantees at least one entry with a positive total.
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Draw one variant.
    pub fn select<R: UniformIntSource + ?Sized>(&self, rng: &mut R) -> &'c ChipVariant<I> {
        let roll = rng.below(self.total_weight());
        let variants = self.variants;
        match self.cumulative.iter().position(|&total| roll < total) {
            Some(pos) => {
                trace!("rolled {} -> {:?}", roll, variants[pos].id());
                &variants[pos]
            }
            None => unreachable!(
                "roll {} is outside of the total weight {}",
                roll,
                self.total_weight()
            ),
        }
    }
}
