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

#![allow(dead_code)]

use std::path::PathBuf;

use apriori::dataset::Transaction;
use apriori::itemset::Item;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn test_data(name: &str) -> PathBuf {
    const TEST_DATA_DIR: &str = "tests/testdata";

    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(TEST_DATA_DIR)
        .join(name)
}

/// Four transactions over three items; every pair occurs twice and the triple once.
pub fn sample_dataset() -> Vec<Transaction> {
    vec![vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
}

/// A reproducible dataset of non-empty transactions over items `1..=num_items`.
pub fn random_dataset(seed: u64, num_transactions: usize, num_items: Item) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let density = rng.random_range(0.2..0.8);
    (0..num_transactions)
        .map(|_| {
            let mut transaction: Transaction = (1..=num_items)
                .filter(|_| rng.random_bool(density))
                .collect();
            if transaction.is_empty() {
                transaction.push(rng.random_range(1..=num_items));
            }
            transaction
        })
        .collect()
}

/// Frequent itemsets found by enumerating every subset of the distinct items, ordered by
/// length and then lexicographically.
pub fn brute_force(dataset: &[Transaction], min_support: f64) -> Vec<Vec<Item>> {
    let mut items: Vec<Item> = dataset.iter().flatten().copied().collect();
    items.sort_unstable();
    items.dedup();
    assert!(items.len() < 16, "too many items to enumerate");

    let mut frequent = Vec::new();
    for mask in 1u32..(1 << items.len()) {
        let subset: Vec<Item> = items
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1u32 << *bit) != 0)
            .map(|(_, item)| *item)
            .collect();
        let count = dataset
            .iter()
            .filter(|transaction| subset.iter().all(|item| transaction.contains(item)))
            .count();
        if apriori::mining::relative_support(count, dataset.len()) >= min_support {
            frequent.push(subset);
        }
    }
    frequent.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    frequent
}
