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

//! Candidate pruning by the Apriori property.

use crate::itemset::Itemset;
use crate::itemset::canonical_cmp;

/// Which `(k-1)`-subsets of a candidate must be frequent for it to survive pruning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PruningStrategy {
    /// Check the subsets obtained by dropping the first item and by dropping the last item.
    #[default]
    BoundarySubsets,
    /// Check every subset obtained by dropping a single item.
    AllSubsets,
}

impl PruningStrategy {
    /// Filters `candidates` against the frequent itemsets of the previous level.
    ///
    /// 1-itemsets always survive. The decision never looks at the dataset; it only asks whether
    /// the required subsets appear in `previous`, which must be canonically ordered. The relative
    /// order of the surviving candidates is preserved.
    pub fn prune(&self, candidates: Vec<Itemset>, previous: &[Itemset]) -> Vec<Itemset> {
        candidates
            .into_iter()
            .filter(|candidate| self.survives(candidate, previous))
            .collect()
    }

    fn survives(&self, candidate: &Itemset, previous: &[Itemset]) -> bool {
        let len = candidate.len();
        if len <= 1 {
            return true;
        }
        match self {
            PruningStrategy::BoundarySubsets => {
                contains(previous, &candidate.without(0))
                    && contains(previous, &candidate.without(len - 1))
            }
            PruningStrategy::AllSubsets => {
                (0..len).all(|index| contains(previous, &candidate.without(index)))
            }
        }
    }
}

fn contains(level: &[Itemset], subset: &Itemset) -> bool {
    level
        .binary_search_by(|frequent| canonical_cmp(frequent, subset))
        .is_ok()
}
