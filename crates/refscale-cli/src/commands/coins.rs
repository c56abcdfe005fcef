use anyhow::Result;
use clap::Args;
use refscale_core::display::convert::mm_to_inches;
use refscale_core::display::Coin;

#[derive(Args)]
pub struct CoinsArgs {}

pub fn run(_args: &CoinsArgs) -> Result<()> {
    println!("{:<10}{:>10}{:>10}", "Coin", "mm", "in");
    for coin in Coin::ALL {
        let mm = coin.diameter_mm();
        println!("{:<10}{:>10.2}{:>10.3}", coin.name(), mm, mm_to_inches(mm));
    }
    Ok(())
}
