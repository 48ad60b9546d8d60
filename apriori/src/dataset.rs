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

//! Transactional datasets.
//!
//! The text format holds one transaction per line, each line a whitespace separated list of
//! base-10 32-bit integers:
//!
//! ```text
//! 1 2 3
//! 1 2
//! 1 3
//! 2 3
//! ```
//!
//! ```
//! # use apriori::dataset::Dataset;
//! let dataset = Dataset::parse("1 2 3\n1 2\n").unwrap();
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.transactions()[1], vec![1, 2]);
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::itemset::Item;

/// One observed set of items, in the order they were read.
pub type Transaction = Vec<Item>;

/// An immutable, ordered collection of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    transactions: Vec<Transaction>,
}

impl Dataset {
    /// Parses a dataset from its text form.
    pub fn parse(text: &str) -> Result<Self, Error> {
        Self::from_reader(text.as_bytes())
    }

    /// Reads a dataset from the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|err| Error::io(format!("failed to open {}", path.display()), err))?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "loaded {} transactions from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Reads a dataset line by line from `reader`.
    ///
    /// A blank line or a token that is not a 32-bit integer is rejected with the 1-based line
    /// number in the error message.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, Error> {
        let mut transactions = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line =
                line.map_err(|err| Error::io(format!("failed to read line {line_no}"), err))?;
            transactions.push(parse_transaction(&line, line_no)?);
        }
        Ok(Self { transactions })
    }

    /// Returns the transactions in input order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if the dataset holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Returns the number of distinct items across all transactions.
    pub fn distinct_items(&self) -> usize {
        self.transactions
            .iter()
            .flatten()
            .collect::<HashSet<_>>()
            .len()
    }
}

impl From<Vec<Transaction>> for Dataset {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl AsRef<[Transaction]> for Dataset {
    fn as_ref(&self) -> &[Transaction] {
        &self.transactions
    }
}

fn parse_transaction(line: &str, line_no: usize) -> Result<Transaction, Error> {
    let mut transaction = Vec::new();
    for token in line.split_whitespace() {
        let item = token.parse::<Item>().map_err(|err| {
            Error::invalid_data(format!("line {line_no}: invalid item {token:?}")).set_source(err)
        })?;
        transaction.push(item);
    }
    if transaction.is_empty() {
        return Err(Error::invalid_data(format!(
            "line {line_no}: empty transaction"
        )));
    }
    Ok(transaction)
}
