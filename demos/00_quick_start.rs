/// quick start - default mortgage, then a custom one
use mortgage_calc_rs::{Decimal, Money, MortgageCalculator, Rate, TermPreset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $100,000 over 30 years at 3.5%
    let mut calc = MortgageCalculator::new();
    println!("monthly: {}", calc.formatted_monthly_payment()?);
    println!("total:   {}", calc.formatted_total_payment()?);

    // $250,000 over 15 years at 4.25%
    calc.set_amount(Money::from_major(250_000));
    calc.set_term(TermPreset::FifteenYears);
    calc.set_rate(Rate::from_percentage(Decimal::new(425, 2)));

    println!("{}", calc.json()?);

    Ok(())
}
