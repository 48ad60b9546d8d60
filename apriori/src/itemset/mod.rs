// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Itemsets and their canonical ordering.
//!
//! An [`Itemset`] is an owned, ascending sequence of distinct [`Item`]s. Every itemset owns its
//! storage: building a longer itemset from an existing one copies the shared prefix into a fresh
//! allocation, so published itemsets are never mutated through another itemset.
//!
//! # Examples
//!
//! ```
//! # use apriori::itemset::Itemset;
//! let itemset = Itemset::new(vec![3, 1, 2]);
//! assert_eq!(itemset.items(), &[1, 2, 3]);
//! assert_eq!(itemset.to_string(), "[1 2 3]");
//! ```

mod ordering;

use std::fmt;
use std::ops::Deref;

pub use self::ordering::canonical_cmp;
pub use self::ordering::normalize;
pub use self::ordering::sort_canonical;

/// An item identifier.
pub type Item = i32;

/// A canonically ordered set of items.
///
/// `Itemset` does not implement [`Ord`]; lists of itemsets are ordered with [`canonical_cmp`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Itemset {
    items: Vec<Item>,
}

impl Itemset {
    /// Creates an itemset from the given items, sorting them ascending.
    pub fn new(mut items: Vec<Item>) -> Self {
        normalize(&mut items);
        Self { items }
    }

    /// Creates the 1-itemset `[item]`.
    pub fn singleton(item: Item) -> Self {
        Self { items: vec![item] }
    }

    /// Builds `prefix + tail` into newly allocated storage.
    pub(crate) fn extend_from(prefix: &[Item], tail: &[Item]) -> Self {
        let mut items = Vec::with_capacity(prefix.len() + tail.len());
        items.extend_from_slice(prefix);
        items.extend_from_slice(tail);
        Self::new(items)
    }

    /// Returns a copy of this itemset with the item at `index` removed.
    pub(crate) fn without(&self, index: usize) -> Self {
        debug_assert!(index < self.items.len());
        Self::extend_from(&self.items[..index], &self.items[index + 1..])
    }

    /// Returns the items in ascending order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns true if every item of this itemset occurs in `transaction`.
    pub fn is_contained_in(&self, transaction: &[Item]) -> bool {
        self.items.iter().all(|item| transaction.contains(item))
    }

    /// Consumes the itemset, returning its items.
    pub fn into_vec(self) -> Vec<Item> {
        self.items
    }
}

impl Deref for Itemset {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.items
    }
}

impl From<Vec<Item>> for Itemset {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl<const N: usize> From<[Item; N]> for Itemset {
    fn from(items: [Item; N]) -> Self {
        Self::new(items.to_vec())
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
