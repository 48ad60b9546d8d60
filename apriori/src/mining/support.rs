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

//! Support counting against the dataset.

use crate::dataset::Transaction;
use crate::itemset::Itemset;
use crate::itemset::sort_canonical;

/// Returns `100 * count / total` as a percentage.
///
/// An empty dataset has a relative support of zero for every itemset.
pub fn relative_support(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * count as f64 / total as f64
}

/// Returns the number of transactions containing every item of `itemset`.
pub fn support_count(dataset: &[Transaction], itemset: &Itemset) -> usize {
    dataset
        .iter()
        .filter(|transaction| itemset.is_contained_in(transaction))
        .count()
}

/// Keeps the candidates whose relative support is at least `min_support` percent.
///
/// The boundary is inclusive, so a threshold of zero keeps every candidate, including those that
/// occur in no transaction. The result is sorted canonically; the order of `candidates` does not
/// affect it. Candidates must share one length.
pub fn count_frequent(
    dataset: &[Transaction],
    candidates: Vec<Itemset>,
    min_support: f64,
) -> Vec<Itemset> {
    let mut counts = vec![0usize; candidates.len()];
    for transaction in dataset {
        for (count, candidate) in counts.iter_mut().zip(&candidates) {
            if candidate.is_contained_in(transaction) {
                *count += 1;
            }
        }
    }

    let total = dataset.len();
    let mut frequent: Vec<Itemset> = candidates
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| relative_support(*count, total) >= min_support)
        .map(|(candidate, _)| candidate)
        .collect();
    sort_canonical(&mut frequent);
    frequent
}
