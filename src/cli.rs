use clap::Parser;

use crate::quantity::power::Watts;

#[derive(Parser)]
#[command(version, about)]
pub struct Args {
    /// Fixture power draw at full intensity, in watts.
    #[clap(long = "full-power-watts", default_value = "5", env = "FULL_POWER_WATTS")]
    pub full_power: Watts,
}
