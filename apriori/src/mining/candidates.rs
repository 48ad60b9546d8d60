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

//! Candidate generation by prefix join.

use crate::itemset::Itemset;

/// Joins the frequent `(k-1)`-itemsets of `previous` into candidate `k`-itemsets.
///
/// For every pair `i < j` whose first `k-2` items are equal, the candidate is the shared prefix
/// followed by the last item of `previous[i]` and the last item of `previous[j]`. Pairs with
/// different prefixes are never joined. `previous` must be canonically ordered and hold itemsets
/// of a single length.
///
/// Candidates are returned in generation order and are neither deduplicated nor pruned.
pub fn generate_candidates(previous: &[Itemset]) -> Vec<Itemset> {
    let mut candidates = Vec::new();
    for (i, left) in previous.iter().enumerate() {
        let Some((&left_last, prefix)) = left.split_last() else {
            continue;
        };
        for right in &previous[i + 1..] {
            debug_assert_eq!(left.len(), right.len());
            let Some((&right_last, right_prefix)) = right.split_last() else {
                continue;
            };
            if prefix == right_prefix {
                candidates.push(Itemset::extend_from(prefix, &[left_last, right_last]));
            }
        }
    }
    candidates
}
