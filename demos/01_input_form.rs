/// input form - lenient text parsing and ignored negative values
use mortgage_calc_rs::{MortgageCalculator, MortgageInput};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=mortgage_calc_rs=debug shows rejected input
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mortgage_calc_rs=debug")))
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    let mut calc = MortgageCalculator::new();
    let form = MortgageInput::from_calculator(&calc);
    println!("pre-filled form: {:?}", form);

    // amount with currency decorations, a 10 year term, 0% interest
    MortgageInput::new("$120,000", "10", "0").apply(&mut calc);
    println!("interest free: {}", calc.formatted_monthly_payment()?);

    // negative amount and years are ignored, the rate still applies
    MortgageInput::new("-5000", "-1", "0.06").apply(&mut calc);
    println!(
        "after bad input: amount {} years {} rate {} -> {}",
        calc.amount(),
        calc.years(),
        calc.rate(),
        calc.formatted_monthly_payment()?
    );

    // zero term has no payments
    MortgageInput::new("120000", "0", "0").apply(&mut calc);
    match calc.monthly_payment() {
        Ok(payment) => println!("unexpected payment {}", payment),
        Err(e) => println!("zero term: {}", e),
    }

    Ok(())
}
