// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_bigint::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Decimal BigInt Example ===\n");

    // Parse two operands far beyond native integer range
    let a = BigInt::from_decimal_str("123456789012345678901234567890").unwrap();
    let b = BigInt::from_decimal_str("987654321098765432109876543210").unwrap();

    println!("a = {} ({} digits, {} limbs)", a, a.digit_count(), a.limb_count());
    println!("b = {} ({} digits, {} limbs)", b, b.digit_count(), b.limb_count());

    // Add them through the engine
    let total = add(&a, &b);
    println!("\na + b = {} ({} digits)", total, total.digit_count());

    // Carry growing the limb count
    let max_limb = BigInt::from_decimal_str("999999999").unwrap();
    let one = BigInt::from_decimal_str("1").unwrap();
    let carried = &max_limb + &one;
    println!(
        "\n{} + {} = {} ({} -> {} limbs)",
        max_limb,
        one,
        carried,
        max_limb.limb_count(),
        carried.limb_count()
    );

    // Accumulate a series of values
    let series: Vec<BigInt> = (1..=5u64)
        .map(|i| BigInt::from_u64(i * 1_000_000_000))
        .collect();
    let accumulated: BigInt = series.iter().sum();
    println!("\nsum of series = {}", accumulated);
}
