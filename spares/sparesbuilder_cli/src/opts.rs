use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::parsers::SourceParser;
use rust_decimal::Decimal;
use sparesbuilder_app::{
    BicycleConfiguration, ConfigurationName, Event, Gear, PartsSource, SparesSource, Wheel,
};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "sparesbuilder_cli")]
#[command(bin_name = "sparesbuilder_cli")]
#[command(version, about, long_about = None)]
pub struct Opts {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub trace: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

#[derive(Args, Clone, Debug)]
pub struct ConfigurationArgs {
    /// Name of bicycle configuration
    #[arg(long, default_value = "Default")]
    name: ConfigurationName,

    /// List of part names
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    part_name_list: Vec<String>,
}

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ConfigurationArgsError {
    #[error("Unknown error")]
    Unknown,
}

impl ConfigurationArgs {
    pub fn build_configuration(&self) -> Result<BicycleConfiguration, ConfigurationArgsError> {
        Ok(BicycleConfiguration::new(
            self.name.clone(),
            self.part_name_list.clone(),
        ))
    }
}

#[derive(Args, Clone, Debug)]
pub struct GearingArgs {
    /// Chainring tooth count
    #[arg(long)]
    chainring: Option<Decimal>,

    /// Cog tooth count
    #[arg(long)]
    cog: Option<Decimal>,

    /// Wheel rim diameter, in inches
    #[arg(long)]
    rim: Option<Decimal>,

    /// Tire height, in inches
    #[arg(long)]
    tire: Option<Decimal>,
}

#[derive(Error, Debug, PartialEq)]
pub enum GearingArgsError {
    #[error("Chainring and cog must be specified together")]
    IncompleteGear,
    #[error("Rim and tire must be specified together")]
    IncompleteWheel,
    #[error("Wheel dimensions require a gear; specify chainring and cog")]
    MissingGear,
}

impl GearingArgs {
    pub fn build_gear(&self) -> Result<Option<Gear>, GearingArgsError> {
        let gear = match (self.chainring, self.cog) {
            (None, None) => None,
            (Some(chainring), Some(cog)) => Some((chainring, cog)),
            _ => return Err(GearingArgsError::IncompleteGear),
        };

        let wheel = match (self.rim, self.tire) {
            (None, None) => None,
            (Some(rim), Some(tire)) => Some(Wheel::new(rim, tire)),
            _ => return Err(GearingArgsError::IncompleteWheel),
        };

        match (gear, wheel) {
            (None, None) => Ok(None),
            (None, Some(_)) => Err(GearingArgsError::MissingGear),
            (Some((chainring, cog)), wheel) => Ok(Some(Gear::new(chainring, cog, wheel))),
        }
    }
}

#[derive(Subcommand)]
#[command(arg_required_else_help(true))]
pub enum Command {
    /// Build spares listing
    Build {
        /// Parts catalog source
        #[arg(long, value_name = "SOURCE", value_parser = SourceParser::default())]
        parts: PartsSource,

        /// Output CSV file
        #[arg(long, value_name = "FILE")]
        output: SparesSource,

        #[command(flatten)]
        configuration_args: Option<ConfigurationArgs>,

        #[command(flatten)]
        gearing_args: GearingArgs,
    },
}

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Missing command")]
    MissingCommand,
    #[error("Invalid configuration arguments, cause: {0}")]
    InvalidConfigurationArgs(#[from] ConfigurationArgsError),
    #[error("Invalid gearing arguments, cause: {0}")]
    InvalidGearingArgs(#[from] GearingArgsError),
}

impl TryFrom<Opts> for Event {
    type Error = EventError;

    fn try_from(opts: Opts) -> Result<Self, Self::Error> {
        match opts.command {
            Some(Command::Build {
                parts,
                output,
                configuration_args,
                gearing_args,
            }) => {
                let configuration = match configuration_args {
                    Some(configuration_args) => configuration_args.build_configuration()?,
                    None => BicycleConfiguration::new(ConfigurationName::from("Default"), vec![]),
                };

                let gear = gearing_args.build_gear()?;

                Ok(Event::Build {
                    parts,
                    configuration,
                    gear,
                    output,
                })
            }
            None => Err(EventError::MissingCommand),
        }
    }
}
