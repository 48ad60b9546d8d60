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

//! The level-wise mining loop.

use std::collections::HashSet;

use crate::dataset::Transaction;
use crate::itemset::Itemset;
use crate::itemset::sort_canonical;
use crate::mining::candidates::generate_candidates;
use crate::mining::prune::PruningStrategy;
use crate::mining::support::count_frequent;

/// Level-wise Apriori miner.
///
/// ```
/// # use apriori::Apriori;
/// let dataset = vec![vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![2, 3]];
/// let frequent = Apriori::new(50.0).mine(&dataset);
/// assert_eq!(frequent.len(), 6);
/// assert_eq!(frequent.max_len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apriori {
    min_support: f64,
    pruning: PruningStrategy,
}

impl Apriori {
    /// Creates a miner with the given minimum support percentage and the default pruning.
    ///
    /// The threshold is expected within `[0, 100]` and is not validated here; see
    /// [`MinSupport`](crate::MinSupport) for the checked form.
    pub fn new(min_support: f64) -> Self {
        Self::with_pruning(min_support, PruningStrategy::default())
    }

    /// Creates a miner with an explicit pruning strategy.
    pub fn with_pruning(min_support: f64, pruning: PruningStrategy) -> Self {
        Self {
            min_support,
            pruning,
        }
    }

    /// Returns the minimum support percentage.
    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Returns the pruning strategy.
    pub fn pruning(&self) -> PruningStrategy {
        self.pruning
    }

    /// Mines every frequent itemset of `dataset`.
    ///
    /// Level 1 is seeded with every distinct item. Each following level is generated from the
    /// previous one, pruned, and counted, until a level comes back empty.
    pub fn mine(&self, dataset: &[Transaction]) -> FrequentItemsets {
        let mut levels = Vec::new();
        let mut current = count_frequent(dataset, seed(dataset), self.min_support);
        log::debug!("level 1: {} frequent itemsets", current.len());

        while !current.is_empty() {
            let k = current[0].len() + 1;
            let candidates = generate_candidates(&current);
            let generated = candidates.len();
            let surviving = self.pruning.prune(candidates, &current);
            let pruned = generated - surviving.len();
            let next = count_frequent(dataset, surviving, self.min_support);
            log::debug!(
                "level {k}: {generated} candidates, {pruned} pruned, {} frequent",
                next.len()
            );
            levels.push(std::mem::replace(&mut current, next));
        }

        let frequent = FrequentItemsets { levels };
        log::info!(
            "mined {} frequent itemsets over {} levels at {}% minimum support",
            frequent.len(),
            frequent.max_len(),
            self.min_support
        );
        frequent
    }
}

/// Mines `dataset` with the default pruning strategy.
pub fn mine(dataset: &[Transaction], min_support: f64) -> FrequentItemsets {
    Apriori::new(min_support).mine(dataset)
}

fn seed(dataset: &[Transaction]) -> Vec<Itemset> {
    let distinct: HashSet<_> = dataset.iter().flatten().copied().collect();
    let mut singletons: Vec<Itemset> = distinct.into_iter().map(Itemset::singleton).collect();
    sort_canonical(&mut singletons);
    log::trace!("seeded {} distinct items", singletons.len());
    singletons
}

/// The frequent itemsets found by a mining run, grouped by length.
///
/// Level `k` holds the frequent `k`-itemsets in canonical order. Iteration yields the levels in
/// ascending length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequentItemsets {
    levels: Vec<Vec<Itemset>>,
}

impl FrequentItemsets {
    /// Returns all non-empty levels, shortest itemsets first.
    pub fn levels(&self) -> &[Vec<Itemset>] {
        &self.levels
    }

    /// Returns the frequent `k`-itemsets, or an empty slice if there are none.
    pub fn level(&self, k: usize) -> &[Itemset] {
        match k.checked_sub(1).and_then(|index| self.levels.get(index)) {
            Some(level) => level.as_slice(),
            None => &[],
        }
    }

    /// Iterates over every frequent itemset in output order.
    pub fn iter(&self) -> impl Iterator<Item = &Itemset> {
        self.levels.iter().flatten()
    }

    /// Returns the total number of frequent itemsets.
    pub fn len(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Returns true if no itemset is frequent.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the length of the longest frequent itemset, or zero.
    pub fn max_len(&self) -> usize {
        self.levels.len()
    }

    /// Flattens the result into a single list in output order.
    pub fn into_vec(self) -> Vec<Itemset> {
        self.levels.into_iter().flatten().collect()
    }
}

impl<'a> IntoIterator for &'a FrequentItemsets {
    type Item = &'a Itemset;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Vec<Itemset>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter().flatten()
    }
}
