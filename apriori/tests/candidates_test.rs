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

use std::collections::HashSet;

use apriori::itemset::Itemset;
use apriori::mining::PruningStrategy;
use apriori::mining::generate_candidates;

fn itemsets(lists: &[&[i32]]) -> Vec<Itemset> {
    lists.iter().map(|items| Itemset::new(items.to_vec())).collect()
}

#[test]
fn test_pairs_from_singletons() {
    let singletons = itemsets(&[&[1], &[2], &[3], &[4]]);
    let candidates = generate_candidates(&singletons);
    assert_eq!(
        candidates,
        itemsets(&[&[1, 2], &[1, 3], &[1, 4], &[2, 3], &[2, 4], &[3, 4]])
    );
}

#[test]
fn test_pair_count_is_binomial() {
    for n in 0..12 {
        let singletons: Vec<Itemset> = (0..n).map(Itemset::singleton).collect();
        let candidates = generate_candidates(&singletons);
        let n = n as usize;
        assert_eq!(candidates.len(), n * n.saturating_sub(1) / 2);
        let distinct: HashSet<&Itemset> = candidates.iter().collect();
        assert_eq!(distinct.len(), candidates.len());
        assert!(candidates.iter().all(|c| c.len() == 2 && c[0] != c[1]));
    }
}

#[test]
fn test_join_requires_shared_prefix() {
    let previous = itemsets(&[&[1, 2], &[1, 3], &[1, 4], &[2, 3]]);
    let candidates = generate_candidates(&previous);
    assert_eq!(candidates, itemsets(&[&[1, 2, 3], &[1, 2, 4], &[1, 3, 4]]));

    // [1 2] and [2 3] differ in their prefix and are never joined
    let previous = itemsets(&[&[1, 2], &[2, 3]]);
    assert!(generate_candidates(&previous).is_empty());
}

#[test]
fn test_generation_leaves_previous_level_untouched() {
    let previous = itemsets(&[&[1, 2, 3], &[1, 2, 4], &[1, 2, 5]]);
    let snapshot = previous.clone();
    let candidates = generate_candidates(&previous);
    assert_eq!(previous, snapshot);
    assert_eq!(
        candidates,
        itemsets(&[&[1, 2, 3, 4], &[1, 2, 3, 5], &[1, 2, 4, 5]])
    );
}

#[test]
fn test_generate_from_empty_or_single() {
    assert!(generate_candidates(&[]).is_empty());
    assert!(generate_candidates(&itemsets(&[&[1, 2]])).is_empty());
}

#[test]
fn test_boundary_pruning() {
    let previous = itemsets(&[&[1, 2], &[1, 3], &[2, 3]]);
    let survivors = PruningStrategy::BoundarySubsets.prune(itemsets(&[&[1, 2, 3]]), &previous);
    assert_eq!(survivors, itemsets(&[&[1, 2, 3]]));

    // drop-first subset [2 3] is missing
    let previous = itemsets(&[&[1, 2], &[1, 3]]);
    let survivors = PruningStrategy::BoundarySubsets.prune(itemsets(&[&[1, 2, 3]]), &previous);
    assert!(survivors.is_empty());
}

#[test]
fn test_boundary_pruning_ignores_middle_subsets() {
    // [1 3] is the only missing subset of [1 2 3]
    let previous = itemsets(&[&[1, 2], &[2, 3]]);
    let candidates = itemsets(&[&[1, 2, 3]]);

    let boundary = PruningStrategy::BoundarySubsets.prune(candidates.clone(), &previous);
    assert_eq!(boundary, candidates);

    let all = PruningStrategy::AllSubsets.prune(candidates, &previous);
    assert!(all.is_empty());
}

#[test]
fn test_singletons_always_survive() {
    let candidates = itemsets(&[&[5], &[1]]);
    for strategy in [PruningStrategy::BoundarySubsets, PruningStrategy::AllSubsets] {
        assert_eq!(strategy.prune(candidates.clone(), &[]), candidates);
    }
}

#[test]
fn test_pruning_preserves_candidate_order() {
    let previous = itemsets(&[&[1, 2], &[1, 3], &[1, 4], &[2, 3], &[3, 4]]);
    let candidates = itemsets(&[&[1, 3, 4], &[1, 2, 4], &[1, 2, 3]]);
    let survivors = PruningStrategy::BoundarySubsets.prune(candidates, &previous);
    // [1 2 4] needs [2 4]
    assert_eq!(survivors, itemsets(&[&[1, 3, 4], &[1, 2, 3]]));
}

#[test]
fn test_default_pruning_strategy() {
    assert_eq!(PruningStrategy::default(), PruningStrategy::BoundarySubsets);
}
