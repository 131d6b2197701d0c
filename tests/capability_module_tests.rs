#![cfg(all(feature = "closure", feature = "module"))]
//! Integration tests for capability modules.
//!
//! Exercises every module through the public API only:
//! - Closure factories (counter, order builder)
//! - Module pattern (order, calculator, account)
//! - The generic factory and module descriptions

#![allow(clippy::float_cmp)]

use capcell::prelude::*;
use rstest::rstest;

// =============================================================================
// Closure Factory Tests
// =============================================================================

#[rstest]
fn counter_one_and_counter_two_keep_separate_counts() {
    let mut counter_one = counter();
    let observed_one: Vec<u64> = (0..5).map(|_| counter_one()).collect();

    let mut counter_two = counter();
    let observed_two: Vec<u64> = (0..4).map(|_| counter_two()).collect();

    assert_eq!(observed_one, vec![1, 2, 3, 4, 5]);
    assert_eq!(observed_two, vec![1, 2, 3, 4]);
}

#[rstest]
fn closure_orders_are_isolated() {
    let mut taytes_order = create_order();
    taytes_order("Meatballs");
    taytes_order("Marinara Sauce");
    let taytes_final = taytes_order("Parmasen Cheese");

    let mut someones_order = create_order();
    someones_order("Ham");
    let someones_final = someones_order("Cheese");

    assert_eq!(
        taytes_final,
        vec!["Meatballs", "Marinara Sauce", "Parmasen Cheese"]
    );
    assert_eq!(someones_final, vec!["Ham", "Cheese"]);
}

#[rstest]
fn counter_can_move_to_another_thread() {
    let mut add_one = counter();
    add_one();
    let handle = std::thread::spawn(add_one);
    assert_eq!(handle.join().unwrap(), 2);
}

// =============================================================================
// Order Tests
// =============================================================================

#[rstest]
fn order_add_remove_read() {
    let mut order = Order::create();
    order.add_ingredient("Ham");
    order.add_ingredient("Cheese");
    order.add_ingredient("Lettuce");

    assert_eq!(order.remove_ingredient("Cheese").unwrap(), ["Ham", "Lettuce"]);
    assert_eq!(order.read_order(), ["Ham", "Lettuce"]);
}

#[rstest]
fn order_remove_missing_reports_not_found() {
    let mut order = Order::create();
    order.add_ingredient("Ham");

    let error = order.remove_ingredient("Pickles").unwrap_err();

    assert_eq!(error.ingredient(), "Pickles");
    assert_eq!(error.to_string(), "Sorry, that ingredient does not exist.");
    assert_eq!(order.read_order(), ["Ham"]);
}

#[rstest]
fn order_accepts_owned_strings() {
    let mut order = Order::create();
    let ingredient = String::from("Tomato");
    assert_eq!(order.add_ingredient(ingredient), ["Tomato"]);
}

// =============================================================================
// Calculator Tests
// =============================================================================

#[rstest]
fn calculator_folds_left_from_zero() {
    let mut ti84: Calculator = capcell::capsule::create();
    assert_eq!(ti84.add(10.0), 10.0);
    assert_eq!(ti84.subtract(5.0), 5.0);
    assert_eq!(ti84.multiply(2.0), 10.0);
    assert_eq!(ti84.divide(2.0), Ok(5.0));
}

#[rstest]
fn calculator_rejects_zero_divisor() {
    let mut ti84 = Calculator::create();
    ti84.add(4.0);
    assert_eq!(ti84.divide(0.0), Err(CalculatorError::DivisionByZero));
    assert_eq!(ti84.divide(4.0), Ok(1.0));
}

// =============================================================================
// Account Tests
// =============================================================================

#[rstest]
fn account_scenario() {
    let mut account = Account::create();
    assert_eq!(account.deposit(100.0), 100.0);
    assert_eq!(account.withdraw(30.0), 70.0);

    let statement = account.check_balance();
    assert_eq!(statement.amount(), 70.0);
    assert!(statement.to_string().contains("70"));
}

#[rstest]
fn accounts_are_isolated() {
    let mut first = Account::create();
    let second = Account::create();
    first.deposit(50.0);
    assert_eq!(second.check_balance().amount(), 0.0);
}

// =============================================================================
// Description Tests
// =============================================================================

#[rstest]
#[case(Order::describe(), "Order { add_ingredient, remove_ingredient, read_order }")]
#[case(Calculator::describe(), "Calculator { add, subtract, multiply, divide }")]
#[case(Account::describe(), "Account { deposit, withdraw, check_balance }")]
fn describe_lists_capabilities(#[case] description: String, #[case] expected: &str) {
    assert_eq!(description, expected);
}
