//! Parses testcases from the JSON challenge definitions and dispatches them
//! to the module that knows how to solve them.

pub mod bigint;
pub mod modp192;

use std::collections::HashMap;
use std::sync::mpsc;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use threadpool::ThreadPool;
use uuid::Uuid;

use crate::settings::Settings;

/// All the assignment actions this analyzer knows how to solve.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Multi-precision addition of two big numbers, wrapping at 384 bits
    #[default]
    AddNumbers,
    /// Multi-precision shift-left of a big number
    ShiftLeft,
    /// Word-wise equality of two big numbers
    CompareNumbers,
    /// Modular reduction mod p192 = 2^192 - 2^64 - 1
    Modp192Reduce,
}

/// A single testcase of a challenge definition: which action to run and the
/// raw arguments for it. The arguments stay untyped JSON here, each action
/// extracts what it needs itself.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Testcase {
    pub action: Action,
    pub arguments: Value,
}

pub type ManyTestcases = HashMap<Uuid, Testcase>;

/// Solve a single [Testcase], returning the response as untyped JSON.
pub fn run_testcase(testcase: &Testcase, settings: Settings) -> Result<Value> {
    match testcase.action {
        Action::AddNumbers | Action::ShiftLeft | Action::CompareNumbers => {
            bigint::run_testcase(testcase, settings)
        }
        Action::Modp192Reduce => modp192::run_testcase(testcase, settings),
    }
}

/// Solve all testcases of a challenge definition.
///
/// The input document must have a `testcases` map of UUID to [Testcase].
/// Testcases are independent of each other, so when there is more than one
/// they are solved on a thread pool and the responses are collected from a
/// channel. The output document maps each UUID to its response.
pub fn run_challenges(raw_json: &Value, settings: Settings) -> Result<Value> {
    let testcases: ManyTestcases = serde_json::from_value(raw_json["testcases"].clone())
        .map_err(|e| anyhow!("challenge definition has no valid testcases: {e}"))?;
    let mut responses = serde_json::Map::new();

    if testcases.len() < 2 {
        for (uuid, testcase) in &testcases {
            let response = run_testcase(testcase, settings)
                .inspect_err(|e| eprintln!("! failure while processing testcase {uuid}: {e}"))?;
            responses.insert(uuid.to_string(), response);
        }
    } else {
        let threads = settings.threads.unwrap_or_else(num_cpus::get);
        if settings.verbose {
            eprintln!("* solving {} testcases on {threads} threads", testcases.len());
        }
        let pool = ThreadPool::new(threads);
        let (sender, receiver) = mpsc::channel();
        for (uuid, testcase) in testcases {
            let sender = sender.clone();
            pool.execute(move || {
                let result = run_testcase(&testcase, settings);
                sender
                    .send((uuid, result))
                    .expect("response channel is closed");
            });
        }
        drop(sender);
        for (uuid, result) in receiver {
            let response = result
                .inspect_err(|e| eprintln!("! failure while processing testcase {uuid}: {e}"))?;
            responses.insert(uuid.to_string(), response);
        }
    }

    Ok(serde_json::json!({"responses": responses}))
}
