//! Minimal example: reversing a vector twice gives it back

use quickprop::{ArrayConfig, arrays, integers, quickcheck};

fn main() {
    let generator = arrays(integers(0, 100).unwrap(), ArrayConfig::default());

    let result = quickcheck(
        |input: Vec<i32>| {
            let mut reversed = input.clone();
            reversed.reverse();
            reversed.reverse();
            reversed == input
        },
        generator,
    );

    match result {
        Ok(()) => println!("✓ Property passed!"),
        Err(failure) => println!("✗ Failed: {}", failure),
    }
}
