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
//! Errors used by the [`ChipCatalog`][crate::chips::ChipCatalog].
use std::fmt::Debug;

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when a catalog is built or queried with a bad variant.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CatalogError<I: Debug> {
    /// The ID is not in the catalog.
    #[error("chip variant {0:?} is not in the catalog")]
    UnknownVariant(I),
    /// A variant with the same ID was already added.
    #[error("chip variant {0:?} already exists")]
    DuplicateVariant(I),
    /// The footprint is not at least one cell wide and tall.
    #[error("chip variant {id:?} has invalid footprint {footprint:?}")]
    InvalidFootprint { id: I, footprint: Coordinate },
}

impl<I: Debug> CatalogError<I> {
    /// The ID of the variant that caused the error.
    pub fn id(&self) -> &I {
        match self {
            CatalogError::UnknownVariant(id)
            | CatalogError::DuplicateVariant(id)
            | CatalogError::InvalidFootprint { id, .. } => id,
        }
    }

    /// Extract the ID of the variant from this error.
    pub fn into_id(self) -> I {
        match self {
            CatalogError::UnknownVariant(id)
            | CatalogError::DuplicateVariant(id)
            | CatalogError::InvalidFootprint { id, .. } => id,
        }
    }
}
