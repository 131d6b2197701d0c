//! A replayable tour of every capability module.
//!
//! [`run`] builds each example from scratch, invokes its capabilities in a
//! fixed script and records what every call returned as a [`Step`]. The
//! `capcell-walkthrough` binary logs the resulting transcript; tests read it
//! directly.
//!
//! # Example
//!
//! ```rust
//! use capcell::walkthrough::{self, Section};
//!
//! let transcript = walkthrough::run(&[Section::Account]);
//! let last = transcript.last().unwrap();
//! assert_eq!(last.value, "Account has a balance of 70");
//! ```

mod config;

pub use config::{
    ConfigError, DEFAULT_LOG_FILTER, FALLBACK_LOG_FILTER_VAR, LOG_FILTER_VAR, SECTIONS_VAR,
    WalkthroughConfig,
};

use std::fmt;
use std::str::FromStr;

use crate::capsule::{self, CapabilityModule};
use crate::closure::{COUNTER_DESCRIPTION, counter, create_order};
use crate::module::{Account, Calculator, Order};

/// One part of the walkthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Two counters showing that each keeps its own count.
    Counter,
    /// Two single-capability orders.
    Order,
    /// An order with add, remove and read.
    OrderV2,
    /// A calculator folding four operations.
    Calculator,
    /// A bank account.
    Account,
}

impl Section {
    /// Every section, in walkthrough order.
    pub const ALL: [Self; 5] = [
        Self::Counter,
        Self::Order,
        Self::OrderV2,
        Self::Calculator,
        Self::Account,
    ];

    /// The name used in configuration and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Order => "order",
            Self::OrderV2 => "order-v2",
            Self::Calculator => "calculator",
            Self::Account => "account",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("unknown section `{name}`"))
    }
}

/// One observed call: what was invoked and what it returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The section the call belongs to.
    pub section: Section,
    /// The call, written as the caller would write it.
    pub label: String,
    /// The rendered return value.
    pub value: String,
}

impl fmt::Display for Step {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}] {} => {}", self.section, self.label, self.value)
    }
}

struct Transcript {
    section: Section,
    steps: Vec<Step>,
}

impl Transcript {
    fn record(&mut self, label: impl Into<String>, value: impl fmt::Display) {
        self.steps.push(Step {
            section: self.section,
            label: label.into(),
            value: value.to_string(),
        });
    }

    fn record_list(&mut self, label: impl Into<String>, items: &[String]) {
        self.record(label, format!("[{}]", items.join(", ")));
    }
}

/// Runs the given sections in order and returns everything they observed.
pub fn run(sections: &[Section]) -> Vec<Step> {
    let mut steps = Vec::new();
    for &section in sections {
        tracing::debug!(%section, "running walkthrough section");
        let mut transcript = Transcript {
            section,
            steps: Vec::new(),
        };
        match section {
            Section::Counter => counters(&mut transcript),
            Section::Order => orders(&mut transcript),
            Section::OrderV2 => order_v2(&mut transcript),
            Section::Calculator => calculator(&mut transcript),
            Section::Account => account(&mut transcript),
        }
        steps.append(&mut transcript.steps);
    }
    steps
}

fn counters(transcript: &mut Transcript) {
    let mut counter_one = counter();
    transcript.record("counter_one", COUNTER_DESCRIPTION);
    for _ in 0..5 {
        transcript.record("counter_one()", counter_one());
    }

    let mut counter_two = counter();
    for _ in 0..4 {
        transcript.record("counter_two()", counter_two());
    }
}

fn orders(transcript: &mut Transcript) {
    let mut taytes_order = create_order();
    for ingredient in ["Meatballs", "Marinara Sauce", "Parmasen Cheese"] {
        let current = taytes_order(ingredient);
        transcript.record_list(format!("taytes_order({ingredient:?})"), &current);
    }

    let mut someones_order = create_order();
    for ingredient in ["Ham", "Cheese"] {
        let current = someones_order(ingredient);
        transcript.record_list(format!("someones_order({ingredient:?})"), &current);
    }
}

fn order_v2(transcript: &mut Transcript) {
    let mut order: Order = capsule::create();
    for ingredient in ["Ham", "Cheese", "Lettuce"] {
        let current = order.add_ingredient(ingredient);
        transcript.record_list(format!("order.add_ingredient({ingredient:?})"), current);
    }

    for ingredient in ["Cheese", "Pickles"] {
        let label = format!("order.remove_ingredient({ingredient:?})");
        match order.remove_ingredient(ingredient) {
            Ok(current) => transcript.record_list(label, current),
            Err(error) => transcript.record(label, error),
        }
    }

    transcript.record_list("order.read_order()", order.read_order());
}

fn calculator(transcript: &mut Transcript) {
    let mut ti84: Calculator = capsule::create();
    transcript.record("ti84", Calculator::describe());
    transcript.record("ti84.add(10)", ti84.add(10.0));
    transcript.record("ti84.subtract(5)", ti84.subtract(5.0));
    transcript.record("ti84.multiply(2)", ti84.multiply(2.0));
    match ti84.divide(2.0) {
        Ok(value) => transcript.record("ti84.divide(2)", value),
        Err(error) => transcript.record("ti84.divide(2)", error),
    }
}

fn account(transcript: &mut Transcript) {
    let mut account: Account = capsule::create();
    transcript.record("account.deposit(100)", account.deposit(100.0));
    transcript.record("account.withdraw(30)", account.withdraw(30.0));
    transcript.record("account.check_balance()", account.check_balance());
}
