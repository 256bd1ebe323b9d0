//! Group Basics
//!
//! This example demonstrates core group operations including:
//! - Constructing the standard group families
//! - Operating on elements, inverses and powers
//! - Centers, conjugacy classes and the class equation
//!
//! Run with: cargo run --example group_basics

use gruppe::{
    center, class_equation, conjugacy_classes, cyclic, dihedral, symmetric, verify,
};

fn main() {
    println!("=== Group Basics ===\n");

    cyclic_arithmetic();
    dihedral_structure();
    symmetric_classes();
}

/// Demonstrate arithmetic in a cyclic group
fn cyclic_arithmetic() {
    println!("--- Cyclic group of order 6 ---\n");

    let c6 = cyclic(6).unwrap();
    println!("order      = {}", c6.order());
    println!("2 + 5      = {}", c6.op(&2, &5));
    println!("-2         = {}", c6.inverse(&2));
    println!("4^3        = {}", c6.power(&4, 3));
    println!("order of 2 = {}", c6.element_order(&2));
    println!("abelian    = {}", c6.is_abelian());
    println!("axioms ok  = {}", verify(&c6).ok());
    println!();
}

/// Demonstrate the symmetries of a square
fn dihedral_structure() {
    println!("--- Dihedral group of the square ---\n");

    let d4 = dihedral(4).unwrap();
    println!("order   = {}", d4.order());
    println!("abelian = {}", d4.is_abelian());

    let z = center(&d4);
    print!("center  = {{");
    for e in z.elements() {
        print!(" {}", e);
    }
    println!(" }}");
    println!();
}

/// Demonstrate conjugacy classes of permutations
fn symmetric_classes() {
    println!("--- Symmetric group on 3 symbols ---\n");

    let s3 = symmetric(3).unwrap();
    println!("order = {}", s3.order());

    for class in conjugacy_classes(&s3) {
        println!(
            "class of {} has size {}",
            class.representative(),
            class.size()
        );
    }
    println!("class equation: {:?}", class_equation(&s3));
    println!();
}
