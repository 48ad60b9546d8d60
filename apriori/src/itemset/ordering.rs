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

//! Canonical ordering of itemsets.
//!
//! The order is defined by [`canonical_cmp`] rather than by the lexicographic [`Ord`] of slices:
//! when one itemset is a prefix of the other, the comparison reports the left operand as greater
//! regardless of which one is shorter. Itemsets of equal length are ordered lexicographically,
//! which is the only case the miner relies on, since every level holds itemsets of one length.

use std::cmp::Ordering;

use super::Item;
use super::Itemset;

/// Sorts `items` ascending in place.
///
/// Normalizing an already sorted slice leaves it unchanged.
pub fn normalize(items: &mut [Item]) {
    items.sort_unstable();
}

/// Compares two normalized itemsets.
///
/// * If `right` is shorter than `left`, `left` is greater.
/// * Otherwise the first position where the items differ decides the order.
/// * If no position differs, equal lengths compare equal and a shorter `left` is greater.
///
/// Itemsets of equal length are therefore ordered lexicographically.
pub fn canonical_cmp(left: &[Item], right: &[Item]) -> Ordering {
    if right.len() < left.len() {
        return Ordering::Greater;
    }
    for (l, r) in left.iter().zip(right) {
        match l.cmp(r) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    if left.len() == right.len() {
        Ordering::Equal
    } else {
        Ordering::Greater
    }
}

/// Sorts a list of itemsets into canonical order.
///
/// All itemsets in the list must have the same length; [`canonical_cmp`] is only a total order
/// among itemsets of equal length.
pub fn sort_canonical(itemsets: &mut [Itemset]) {
    debug_assert!(
        itemsets.windows(2).all(|w| w[0].len() == w[1].len()),
        "sort_canonical requires itemsets of uniform length"
    );
    itemsets.sort_by(|a, b| canonical_cmp(a, b));
}
