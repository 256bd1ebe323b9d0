//! Subgroup Tour
//!
//! This example walks the subgroup lattice of small groups:
//! - Enumerating all subgroups and the maximal ones
//! - Normality, quotients and cosets
//! - The sign homomorphism and the first isomorphism theorem
//!
//! Run with: cargo run --example subgroup_tour

use gruppe::{
    all_subgroups, frattini_subgroup, is_normal, left_cosets, quotient_group, sign_homomorphism,
    symmetric, SearchLimits, Subgroup,
};

fn main() {
    println!("=== Subgroup Tour ===\n");

    subgroup_lattice();
    cosets_and_quotients();
    kernel_and_image();
}

/// Enumerate the subgroups of S3
fn subgroup_lattice() {
    println!("--- Subgroups of S3 ---\n");

    let s3 = symmetric(3).unwrap();
    let limits = SearchLimits::default();

    for h in all_subgroups(&s3, &limits).unwrap() {
        println!(
            "order {} (index {}), normal: {}",
            h.order(),
            h.index().unwrap(),
            is_normal(&h)
        );
    }

    let frattini = frattini_subgroup(&s3, &limits).unwrap();
    println!("Frattini subgroup has order {}", frattini.order());
    println!();
}

/// Build the quotient of S3 by its alternating subgroup
fn cosets_and_quotients() {
    println!("--- S3 modulo A3 ---\n");

    let s3 = symmetric(3).unwrap();
    let even: Vec<_> = s3.iter().filter(|p| p.is_even()).cloned().collect();
    let a3 = Subgroup::generated(&s3, even).unwrap();

    for coset in left_cosets(&a3) {
        println!("coset of {} has {} elements", coset.representative(), coset.len());
    }

    let quotient = quotient_group(&a3).unwrap();
    println!("quotient order = {}", quotient.order());
    println!();
}

/// Analyze the sign homomorphism
fn kernel_and_image() {
    println!("--- Sign homomorphism on S4 ---\n");

    let sign = sign_homomorphism(4).unwrap();
    println!("homomorphism = {}", sign.is_homomorphism());
    println!("|kernel|     = {}", sign.kernel().order());
    println!("|image|      = {}", sign.image().order());
    println!(
        "|S4| / |ker| = {}",
        sign.first_isomorphism_theorem().unwrap()
    );
    println!();
}
