//! Builds the classic number structures and prints the sampled verdicts.
//!
//! Run with `RUST_LOG=trace` to see both sides of every comparison.

use magma::prelude::*;

fn verdict(structure: &str, law: &str, holds: bool) {
    println!("{structure} -> {law}? {holds}");
}

fn main() {
    env_logger::init();

    println!("Sampled algebraic laws\n");

    // (ℤ, +) as a plain semigroup
    let int_semigroup = FnSemigroup::new(|a: &i32, b: &i32| a + b);
    let holds = int_semigroup.is_associative(&mut Stepping::new(0, 10));
    verdict("IntSemiGroup", "IsAssociative", holds);
    println!();

    // (ℤ, ·) declared commutative
    let int_commutative_semigroup = FnSemigroup::new(|a: &i32, b: &i32| a * b).commuting();
    let holds = int_commutative_semigroup.is_associative(&mut Stepping::new(0, 2));
    verdict("IntCommutativeSemiGroup", "IsAssociative", holds);
    let holds = int_commutative_semigroup.is_commutative(&mut Stepping::new(0, 3));
    verdict("IntCommutativeSemiGroup", "IsCommutative", holds);
    println!();

    // (ℝ, ·, 1)
    let real_monoid = Multiplication::<f64>::new();
    let holds = real_monoid.is_associative(&mut Stepping::new(0.0, 2.0));
    verdict("RealMonoid", "IsAssociative", holds);
    println!("RealMonoid -> Identity: {}", real_monoid.identity());
    println!();

    // (ℤ, ·, 1)
    let int_commutative_monoid = Multiplication::<i32>::new();
    let mut gen = Stepping::new(0, 3);
    verdict(
        "IntCommutativeMonoid",
        "IsAssociative",
        int_commutative_monoid.is_associative(&mut gen),
    );
    verdict(
        "IntCommutativeMonoid",
        "IsCommutative",
        int_commutative_monoid.is_commutative(&mut gen),
    );
    println!();

    // (ℤ, +, 0, -a) without the commutativity declaration
    let int_group = FnGroup::new(|a: &i32, b: &i32| a + b, 0, |a: &i32| -a);
    verdict(
        "IntGroup",
        "IsAssociative",
        int_group.is_associative(&mut Stepping::new(0, 10)),
    );
    verdict(
        "IntGroup",
        "IsInverse",
        int_group.is_inverse(&mut Stepping::new(0, 10)),
    );
    println!("IntGroup -> Inverse of 7: {}", int_group.inverse(&7));
    println!();

    let int_commutative_group = Addition::<i32>::new();
    let mut gen = Stepping::new(0, 5);
    verdict(
        "IntCommutativeGroup",
        "IsAssociative",
        int_commutative_group.is_associative(&mut gen),
    );
    verdict(
        "IntCommutativeGroup",
        "IsCommutative",
        int_commutative_group.is_commutative(&mut gen),
    );
    println!();

    // (ℤ, +, ·) with a non-commutative view of multiplication
    let int_ring = Ring::new(
        Addition::<i32>::new(),
        FnMonoid::new(|a: &i32, b: &i32| a * b, 1),
    );
    let mut gen = Stepping::new(0, 4);
    verdict(
        "IntRing",
        "IsLeftDistributive",
        int_ring.is_left_distributive(&mut gen),
    );
    verdict(
        "IntRing",
        "IsRightDistributive",
        int_ring.is_right_distributive(&mut gen),
    );
    println!();

    let int_commutative_ring =
        CommutativeRing::new(Addition::<i32>::new(), Multiplication::<i32>::new());
    let mut gen = Stepping::new(0, 4);
    verdict(
        "IntCommutativeRing",
        "IsLeftDistributive",
        int_commutative_ring.is_left_distributive(&mut gen),
    );
    verdict(
        "IntCommutativeRing",
        "IsRightDistributive",
        int_commutative_ring.is_right_distributive(&mut gen),
    );
    println!();

    // (ℕ, +, ·)
    let natural_semiring = SemiRing::new(Addition::<u32>::new(), Multiplication::<u32>::new());
    let mut gen = Stepping::new(0u32, 1);
    verdict(
        "NSemiRing",
        "IsLeftDistributive",
        natural_semiring.is_left_distributive(&mut gen),
    );
    verdict(
        "NSemiRing",
        "IsRightDistributive",
        natural_semiring.is_right_distributive(&mut gen),
    );
    verdict(
        "NSemiRing",
        "DoesZeroAnnihilate(5)",
        natural_semiring.does_zero_annihilate(&5),
    );
    println!();

    // Subtraction is neither associative nor commutative
    let subtraction = FnSemigroup::new(|a: &i32, b: &i32| a - b).commuting();
    let mut gen = Stepping::new(0, 1);
    verdict(
        "IntSubtraction",
        "IsAssociative",
        subtraction.is_associative(&mut gen),
    );
    verdict(
        "IntSubtraction",
        "IsCommutative",
        subtraction.is_commutative(&mut gen),
    );
    println!();

    println!("--- Multi-round Reports ---\n");

    let verifier = Verifier::new().rounds(32);
    let max_plus: MaxPlus<f64> = SemiRing::new(Max::new(), Addition::new());
    let mut seeded = Seeded::new(-1_000i32..=1_000);
    let report = verifier.verify_semiring(&max_plus, &mut || f64::from(seeded.generate()));
    println!("MaxPlus semiring: {report}\n");

    match Field::new(Addition::<f64>::new(), Multiplication::<f64>::new()) {
        Ok(reals) => {
            let mut gen = Cycle::new(vec![0.5, 2.0, -4.0, 8.0, 0.25]);
            let report = verifier.verify_field(&reals, &mut gen);
            println!("Real field: {report}\n");
        }
        Err(e) => println!("Real field: {e}\n"),
    }

    // the zero ring {()} has 0 = 1
    let zero_ring = Field::new(
        FnGroup::new(|_: &(), _: &()| (), (), |_: &()| ()).commuting(),
        FnGroup::new(|_: &(), _: &()| (), (), |_: &()| ()).commuting(),
    );
    if let Err(e) = zero_ring {
        println!("Degenerate field rejected: {e}");
    }
}
