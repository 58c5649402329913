//! Polynomial Arithmetic
//!
//! This example demonstrates `Poly` operations including:
//! - Basic arithmetic (add, sub, mul, scalar mul)
//! - Single-step remainder and full division
//! - Derivatives, integrals and evaluation
//!
//! Run with: cargo run --example poly_arithmetic

use fpoly::{poly, Poly};

fn main() {
    println!("=== Polynomial Arithmetic over f64 ===\n");

    basic_operations();
    division();
    calculus_and_eval();
}

/// Demonstrate basic polynomial operations
fn basic_operations() {
    println!("--- Basic Operations ---\n");

    // p(x) = 1 + 2x + x^2, q(x) = 1 + x
    let p = poly![1, 2, 1];
    let q = poly![1, 1];

    println!("p(x) = {}", p);
    println!("q(x) = {}", q);
    println!("degree(p) = {}", p.degree());
    println!("degree(q) = {}", q.degree());
    println!();

    println!("p + q = {}", &p + &q);
    println!("p - q = {}", &p - &q);
    println!("p * q = {}", &p * &q);
    println!("3 * p = {}", p.clone() * 3.0);
    println!("p - p = {}", &p - &p);

    println!("\nSpecial polynomials:");
    println!("  zero = {}", Poly::zero());
    println!("  default = {}", Poly::default());
    println!("  x = {}", Poly::x());
    println!("  constant(5) = {}", Poly::constant(5.0));
    println!("  monomial(3, 2) = {}", Poly::monomial(3.0, 2));
    println!();
}

/// Demonstrate the single-step remainder against full division
fn division() {
    println!("--- Division ---\n");

    // p(x) = x^3 - 1, q(x) = x - 1
    let p = poly![-1, 0, 0, 1];
    let q = poly![-1, 1];

    println!("p(x) = {}", p);
    println!("q(x) = {}", q);
    println!();

    // One reduction step only cancels the leading term
    println!("p % q (one step) = {}", &p % &q);

    match p.div_rem(&q) {
        Ok((quotient, remainder)) => {
            println!("p / q:");
            println!("  quotient  = {}", quotient);
            println!("  remainder = {}", remainder);

            let reconstructed = &(&q * &quotient) + &remainder;
            println!("Verify: q * quotient + remainder = {}", reconstructed);
            println!("Equals p? {}", reconstructed.approx_eq(&p, 1e-9));
        }
        Err(e) => println!("division failed: {}", e),
    }

    if let Err(e) = p.div_rem(&Poly::zero()) {
        println!("p / 0: {}", e);
    }

    println!();
}

/// Demonstrate derivatives, integrals and evaluation
fn calculus_and_eval() {
    println!("--- Calculus and Evaluation ---\n");

    // p(x) = 1 + 2x + 3x^2 + 4x^3
    let p = poly![1, 2, 3, 4];
    println!("p(x) = {}", p);
    println!();

    let dp = p.derivative();
    println!("p'(x) = {}", dp);
    println!("p''(x) = {}", dp.derivative());
    println!("∫p dx (k = 5) = {}", p.integral(5.0));
    println!("∫_0^1 p dx = {:.4}", p.definite_integral(0.0, 1.0));
    println!("with one decimal: {:.1}", p);
    println!();

    println!("Evaluation:");
    for x in [0.0, 1.0, 2.0, -0.5] {
        println!("  p({}) = {}", x, p.eval(x));
    }
}
