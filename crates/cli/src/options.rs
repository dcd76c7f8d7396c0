use std::{fmt, str::FromStr};

use anyhow::{Error, anyhow};
use isa_toolkit::{AltitudeKind, SpeedKind};
use structopt::{StructOpt, clap::AppSettings};
use uom::si::{
    f64::Length,
    length::{foot, meter},
};

/// Compute International Standard Atmosphere and aerodynamic state.
#[derive(Debug, StructOpt)]
#[structopt(name = "isa-toolkit")]
pub enum Command {
    /// Calculate ISA atmosphere state
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    Isa(IsaOpt),
    /// Calculate aerodynamic state
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    Aero(AeroOpt),
}

#[derive(Debug, StructOpt)]
pub struct IsaOpt {
    /// Altitude value
    pub altitude: f64,

    /// How the altitude is interpreted
    #[structopt(
        long = "type",
        default_value = "geometric",
        possible_values = &["geometric", "geopotential"]
    )]
    pub kind: AltitudeKind,

    /// Unit of the altitude
    #[structopt(long, default_value = "m", possible_values = &["m", "ft"])]
    pub units: LengthUnit,

    #[structopt(long, default_value = "table", possible_values = &["table", "json"])]
    pub output: OutputFormat,
}

#[derive(Debug, StructOpt)]
pub struct AeroOpt {
    /// Speed value (m/s or Mach)
    pub speed: f64,

    #[structopt(
        long,
        default_value = "TAS",
        possible_values = &["TAS", "EAS", "mach"],
        case_insensitive = true
    )]
    pub speed_type: SpeedKind,

    /// Altitude value
    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    pub altitude: f64,

    #[structopt(
        long,
        default_value = "geometric",
        possible_values = &["geometric", "geopotential"]
    )]
    pub altitude_type: AltitudeKind,

    #[structopt(long, default_value = "m", possible_values = &["m", "ft"])]
    pub altitude_units: LengthUnit,

    /// Characteristic length (m)
    #[structopt(long, default_value = "1.0")]
    pub char_len: f64,

    #[structopt(long, default_value = "table", possible_values = &["table", "json"])]
    pub output: OutputFormat,
}

/// Unit of an altitude given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meters,
    Feet,
}

impl LengthUnit {
    pub fn length(self, value: f64) -> Length {
        match self {
            LengthUnit::Meters => Length::new::<meter>(value),
            LengthUnit::Feet => Length::new::<foot>(value),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LengthUnit::Meters => "m",
            LengthUnit::Feet => "ft",
        })
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(LengthUnit::Meters),
            "ft" => Ok(LengthUnit::Feet),
            other => Err(anyhow!("unknown length unit `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("unknown output format `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn isa_defaults() {
        let command = Command::from_iter_safe(["isa-toolkit", "isa", "1000"]).unwrap();
        let Command::Isa(opt) = command else {
            panic!("expected the isa subcommand");
        };

        assert_eq!(opt.altitude, 1000.0);
        assert_eq!(opt.kind, AltitudeKind::Geometric);
        assert_eq!(opt.units, LengthUnit::Meters);
        assert_eq!(opt.output, OutputFormat::Table);
    }

    #[test]
    fn aero_options() {
        let command = Command::from_iter_safe([
            "isa-toolkit",
            "aero",
            "0.8",
            "--speed-type",
            "mach",
            "--altitude",
            "35000",
            "--altitude-units",
            "ft",
            "--char-len",
            "3.5",
            "--output",
            "json",
        ])
        .unwrap();
        let Command::Aero(opt) = command else {
            panic!("expected the aero subcommand");
        };

        assert_eq!(opt.speed_type, SpeedKind::Mach);
        assert_eq!(opt.altitude_type, AltitudeKind::Geometric);
        assert_eq!(opt.altitude_units, LengthUnit::Feet);
        assert_eq!(opt.char_len, 3.5);
        assert_eq!(opt.output, OutputFormat::Json);
    }

    #[test]
    fn negative_altitude_is_accepted_by_the_parser() {
        let command =
            Command::from_iter_safe(["isa-toolkit", "isa", "-100", "--type", "geopotential"])
                .unwrap();
        let Command::Isa(opt) = command else {
            panic!("expected the isa subcommand");
        };
        assert_eq!(opt.altitude, -100.0);
        assert_eq!(opt.kind, AltitudeKind::Geopotential);
    }

    #[test]
    fn negative_speed_is_accepted_by_the_parser() {
        let command =
            Command::from_iter_safe(["isa-toolkit", "aero", "-5", "--altitude", "-50"]).unwrap();
        let Command::Aero(opt) = command else {
            panic!("expected the aero subcommand");
        };

        assert_eq!(opt.speed, -5.0);
        assert_eq!(opt.altitude, -50.0);
    }

    #[test]
    fn unknown_choices_are_rejected() {
        let bad_unit = Command::from_iter_safe(["isa-toolkit", "isa", "0", "--units", "km"]);
        assert!(bad_unit.is_err());

        let bad_speed = ["isa-toolkit", "aero", "100", "--speed-type", "CAS"];
        assert!(Command::from_iter_safe(bad_speed).is_err());
    }

    #[test]
    fn feet_convert_to_meters() {
        use uom::si::length::meter;
        let one_foot = LengthUnit::Feet.length(1.0);
        assert_relative_eq!(one_foot.get::<meter>(), 0.3048, epsilon = 1e-12);
        assert_relative_eq!(LengthUnit::Meters.length(12.5).get::<meter>(), 12.5);
    }
}
