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
//! Types used for defining chip variants, their footprints and spawn weights.
use std::{borrow::Borrow, collections::HashMap, fmt::Debug, hash::Hash};

use crate::board::Coordinate;

pub use self::{
    errors::CatalogError,
    selector::{FromFn, UniformIntSource, WeightedSelector},
    standard::ChipKind,
};

mod errors;
mod selector;
mod standard;

/// Trait for types that can be used as a chip variant's ID.
/// IDs are treated as disposable and cheaply cloneable. If you need a complex ID type
/// that isn't cheap to clone, you may want to wrap it in `Rc` or `Arc`.
///
/// Auto-implemented for any type which implements `Debug`,`Clone`, `Eq`, and `Hash`.
pub trait ChipId: Debug + Clone + Eq + Hash {}
impl<T: Debug + Clone + Eq + Hash> ChipId for T {}

/// A chip variant: an ID, the footprint it occupies when not flipped, and its relative
/// spawn weight.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ChipVariant<I> {
    id: I,
    footprint: Coordinate,
    weight: u32,
}

impl<I> ChipVariant<I> {
    /// ID of this variant.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Unflipped footprint, `x` is the width and `y` the height.
    pub fn footprint(&self) -> Coordinate {
        self.footprint
    }

    /// Relative spawn weight. Zero means the variant is never selected.
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// Table of chip variants. Lookups go by ID; the declared order of the variants is only
/// used to make weighted selection reproducible.
#[derive(Debug, Clone)]
pub struct ChipCatalog<I: ChipId> {
    /// Variants in the order they were added.
    variants: Vec<ChipVariant<I>>,

    /// Position of each ID in `variants`.
    index: HashMap<I, usize>,
}

impl<I: ChipId> ChipCatalog<I> {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            variants: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a variant to the end of the catalog. Fails if the ID is already present or the
    /// footprint is not at least one cell on each side.
    pub fn add_variant<C: Into<Coordinate>>(
        &mut self,
        id: I,
        footprint: C,
        weight: u32,
    ) -> Result<&ChipVariant<I>, CatalogError<I>> {
        let footprint = footprint.into();
        if self.index.contains_key(&id) {
            return Err(CatalogError::DuplicateVariant(id));
        }
        if footprint.x <= 0 || footprint.y <= 0 {
            return Err(CatalogError::InvalidFootprint { id, footprint });
        }
        let pos = self.variants.len();
        self.index.insert(id.clone(), pos);
        self.variants.push(ChipVariant {
            id,
            footprint,
            weight,
        });
        Ok(&self.variants[pos])
    }

    /// Copy this catalog, replacing the weights of the listed variants. Variants that are
    /// not listed keep their weight.
    pub fn reweighted<W>(&self, weights: W) -> Result<Self, CatalogError<I>>
    where
        W: IntoIterator<Item = (I, u32)>,
    {
        let mut catalog = self.clone();
        for (id, weight) in weights {
            match catalog.index.get(&id) {
                Some(&pos) => catalog.variants[pos].weight = weight,
                None => return Err(CatalogError::UnknownVariant(id)),
            }
        }
        Ok(catalog)
    }

    /// Get the variant with the specified ID if it exists.
    pub fn get<Q: ?Sized>(&self, id: &Q) -> Option<&ChipVariant<I>>
    where
        I: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.index.get(id).map(|&pos| &self.variants[pos])
    }

    /// Get the unflipped footprint of the variant with the specified ID.
    pub fn footprint(&self, id: &I) -> Result<Coordinate, CatalogError<I>> {
        self.get(id)
            .map(ChipVariant::footprint)
            .ok_or_else(|| CatalogError::UnknownVariant(id.clone()))
    }

    /// Get the spawn weight of the variant with the specified ID.
    pub fn weight(&self, id: &I) -> Result<u32, CatalogError<I>> {
        self.get(id)
            .map(ChipVariant::weight)
            .ok_or_else(|| CatalogError::UnknownVariant(id.clone()))
    }

    /// All variants, in declared order.
    pub fn variants(&self) -> &[ChipVariant<I>] {
        &self.variants
    }

    /// Number of variants in the catalog.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns true if the catalog has no variants.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Sum of all weights, or `None` if it overflows a `u32`.
    pub fn total_weight(&self) -> Option<u32> {
        self.variants
            .iter()
            .try_fold(0u32, |total, variant| total.checked_add(variant.weight))
    }

    /// The longest side of any selectable footprint. Footprints may be placed flipped, so
    /// both sides count.
    pub fn largest_dimension(&self) -> u32 {
        self.variants
            .iter()
            .filter(|variant| variant.weight > 0)
            .map(|variant| variant.footprint.x.max(variant.footprint.y) as u32)
            .max()
            .unwrap_or(0)
    }
}

impl<I: ChipId> Default for ChipCatalog<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ChipCatalog<&'static str> {
        let mut catalog = ChipCatalog::new();
        catalog.add_variant("wide", (4, 1), 3).unwrap();
        catalog.add_variant("tall", (1, 5), 1).unwrap();
        catalog.add_variant("unused", (7, 7), 0).unwrap();
        catalog
    }

    #[test]
    fn lookups_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.footprint(&"wide"), Ok(Coordinate::new(4, 1)));
        assert_eq!(catalog.weight(&"tall"), Ok(1));
        assert_eq!(
            catalog.footprint(&"missing"),
            Err(CatalogError::UnknownVariant("missing"))
        );
        assert_eq!(catalog.get("tall").map(ChipVariant::footprint), Some(Coordinate::new(1, 5)));
    }

    #[test]
    fn rejects_bad_variants() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.add_variant("wide", (1, 1), 1).unwrap_err(),
            CatalogError::DuplicateVariant("wide")
        );
        assert_eq!(
            catalog.add_variant("flat", (3, 0), 1).unwrap_err(),
            CatalogError::InvalidFootprint {
                id: "flat",
                footprint: Coordinate::new(3, 0),
            }
        );
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn reweighting_keeps_unlisted_weights() {
        let catalog = catalog().reweighted(vec![("tall", 9)]).unwrap();
        assert_eq!(catalog.weight(&"tall"), Ok(9));
        assert_eq!(catalog.weight(&"wide"), Ok(3));
        assert_eq!(catalog.total_weight(), Some(12));
        assert_eq!(
            catalog.reweighted(vec![("nope", 1)]).unwrap_err(),
            CatalogError::UnknownVariant("nope")
        );
    }

    #[test]
    fn largest_dimension_ignores_unselectable_variants() {
        let catalog = catalog();
        assert_eq!(catalog.largest_dimension(), 5);
        let catalog = catalog.reweighted(vec![("unused", 2)]).unwrap();
        assert_eq!(catalog.largest_dimension(), 7);
        assert_eq!(ChipCatalog::<u8>::new().largest_dimension(), 0);
    }

    #[test]
    fn total_weight_detects_overflow() {
        let mut catalog = ChipCatalog::new();
        catalog.add_variant(1, (1, 1), u32::max_value()).unwrap();
        catalog.add_variant(2, (1, 1), 1).unwrap();
        assert_eq!(catalog.total_weight(), None);
    }
}
