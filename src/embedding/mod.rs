// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term embeddings: the read-only dictionary every scorer leans on.
//!
//! The store is built once (from a dictionary file or a builder) and then
//! frozen. There is no way to mutate an `EmbeddingStore` after `build()`, so
//! sharing it across scoring threads behind an `Arc` needs no locking.

mod distance;
mod store;

pub use distance::*;
pub use store::*;
