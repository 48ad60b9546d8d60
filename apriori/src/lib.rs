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

//! Frequent itemset mining with the Apriori algorithm.
//!
//! Given a collection of transactions and a minimum support percentage, the miner discovers every
//! itemset that occurs in at least that share of the transactions.
//!
//! ```
//! # use apriori::Apriori;
//! # use apriori::dataset::Dataset;
//! let dataset = Dataset::parse("1 2 3\n1 2\n1 3\n2 3\n").unwrap();
//! let frequent = Apriori::new(50.0).mine(dataset.transactions());
//! let rendered: Vec<String> = frequent.iter().map(|itemset| itemset.to_string()).collect();
//! assert_eq!(rendered, ["[1]", "[2]", "[3]", "[1 2]", "[1 3]", "[2 3]"]);
//! ```

#![deny(missing_docs)]

pub mod dataset;
pub mod error;
pub mod itemset;
pub mod mining;

mod threshold;

pub use self::mining::Apriori;
pub use self::mining::FrequentItemsets;
pub use self::threshold::MinSupport;
