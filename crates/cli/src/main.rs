mod options;
mod report;

use std::io::{self, Write};

use anyhow::{Context, Result};
use isa_toolkit::{
    AltitudeKind, AtmosphereState, compute_aerodynamic_state, quantity::query_atmosphere_at,
};
use log::debug;
use structopt::StructOpt;

use crate::{
    options::{Command, LengthUnit},
    report::{AerodynamicReport, AtmosphereReport},
};

fn main() -> Result<()> {
    env_logger::init();
    let command = Command::from_args();
    debug!("running {command:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&command, &mut out)
}

fn run<W: Write>(command: &Command, out: &mut W) -> Result<()> {
    match command {
        Command::Isa(opt) => {
            let state = atmosphere_at(opt.altitude, opt.units, opt.kind)?;
            AtmosphereReport::from(&state).write(out, opt.output)
        }
        Command::Aero(opt) => {
            let atmosphere = atmosphere_at(opt.altitude, opt.altitude_units, opt.altitude_type)?;
            let state =
                compute_aerodynamic_state(opt.speed, opt.speed_type, &atmosphere, opt.char_len);
            AerodynamicReport::from(&state).write(out, opt.output)
        }
    }
}

fn atmosphere_at(altitude: f64, units: LengthUnit, kind: AltitudeKind) -> Result<AtmosphereState> {
    query_atmosphere_at(units.length(altitude), kind)
        .with_context(|| format!("evaluating the atmosphere at {altitude} {units}"))
}
