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

use std::path::PathBuf;
use std::process::ExitCode;

use apriori::Apriori;
use apriori::MinSupport;
use apriori::dataset::Dataset;
use apriori::error::Error;
use apriori::mining::PruningStrategy;
use clap::Parser;
use clap::ValueEnum;

mod logger;
mod report;

/// Mine frequent itemsets from a transaction file.
#[derive(Parser, Debug)]
#[command(name = "apriori", version, about)]
struct Args {
    /// Transaction file, one whitespace separated list of integer items per line.
    file: PathBuf,

    /// Minimum support as a percentage between 0 and 100.
    #[arg(value_parser = parse_min_support)]
    min_support: MinSupport,

    /// Which subsets of a candidate must be frequent before it is counted.
    #[arg(long, value_enum, default_value_t = Pruning::Boundary)]
    pruning: Pruning,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Pruning {
    /// Drop-first and drop-last subsets.
    Boundary,
    /// Every single-item-removed subset.
    All,
}

impl From<Pruning> for PruningStrategy {
    fn from(pruning: Pruning) -> Self {
        match pruning {
            Pruning::Boundary => PruningStrategy::BoundarySubsets,
            Pruning::All => PruningStrategy::AllSubsets,
        }
    }
}

fn parse_min_support(value: &str) -> Result<MinSupport, String> {
    value.parse::<MinSupport>().map_err(|err| err.message().to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.verbose);

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, Error> {
    let dataset = Dataset::open(&args.file)?;
    let miner = Apriori::with_pruning(args.min_support.percent(), args.pruning.into());
    let frequent = miner.mine(dataset.transactions());
    Ok(report::render(args.min_support, &frequent))
}
