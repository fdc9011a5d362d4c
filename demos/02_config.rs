/// config - defaults and term options from json
use mortgage_calc_rs::{MortgageCalculator, MortgageConfig};

const CONFIG: &str = r#"{
    "defaults": { "principal": "350000", "term_years": 30, "annual_rate": "0.0625" },
    "term_options": [10, 15, 20, 30]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MortgageConfig::from_json(CONFIG)?;
    let mut calc = MortgageCalculator::from_config(&config)?;

    for years in &config.term_options {
        calc.set_years(i64::from(*years));
        println!(
            "{:>2} years: {} / month, {} total",
            years,
            calc.formatted_monthly_payment()?,
            calc.formatted_total_payment()?
        );
    }

    Ok(())
}
