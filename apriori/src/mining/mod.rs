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

//! Level-wise frequent itemset mining.
//!
//! # Overview
//!
//! Mining proceeds one itemset length at a time. Level 1 holds the distinct items whose support
//! meets the threshold. Level `k + 1` is derived from level `k` in three steps:
//!
//! 1. [`generate_candidates`] joins pairs of `k`-itemsets that share their first `k - 1` items.
//! 2. [`PruningStrategy::prune`] drops candidates with a required `k`-subset missing from level
//!    `k`. No superset of an infrequent itemset can be frequent, so these never need counting.
//! 3. [`count_frequent`] scans the dataset and keeps the candidates whose relative support is at
//!    least the threshold.
//!
//! The loop stops at the first empty level.
//!
//! # Support
//!
//! Relative support is `100 * count / |dataset|`, and an itemset is frequent when its relative
//! support is greater than or equal to the minimum support percentage.
//!
//! # Examples
//!
//! ```
//! # use apriori::itemset::Itemset;
//! # use apriori::mining::mine;
//! let dataset = vec![vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![2, 3]];
//! let frequent = mine(&dataset, 25.0);
//! assert_eq!(frequent.level(3), &[Itemset::from([1, 2, 3])]);
//! ```

mod candidates;
mod miner;
mod prune;
mod support;

pub use self::candidates::generate_candidates;
pub use self::miner::Apriori;
pub use self::miner::FrequentItemsets;
pub use self::miner::mine;
pub use self::prune::PruningStrategy;
pub use self::support::count_frequent;
pub use self::support::relative_support;
pub use self::support::support_count;
