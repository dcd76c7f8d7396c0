//! Table and JSON renderings of computed states.

use std::{fmt, io::Write};

use anyhow::Result;
use isa_toolkit::{
    AerodynamicState, AtmosphereState,
    quantity::{AerodynamicQuantities, AtmosphereQuantities},
};
use serde::Serialize;
use uom::si::{
    dynamic_viscosity::pascal_second,
    kinematic_viscosity::square_meter_per_second,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::options::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtmosphereReport {
    #[serde(rename = "temperature_K")]
    pub temperature: f64,
    #[serde(rename = "pressure_Pa")]
    pub pressure: f64,
    #[serde(rename = "density_kg_per_m3")]
    pub density: f64,
    #[serde(rename = "speed_of_sound_m_per_s")]
    pub speed_of_sound: f64,
    #[serde(rename = "dynamic_viscosity_Pa_s")]
    pub dynamic_viscosity: f64,
    #[serde(rename = "kinematic_viscosity_m2_per_s")]
    pub kinematic_viscosity: f64,
}

impl From<&AtmosphereState> for AtmosphereReport {
    fn from(state: &AtmosphereState) -> Self {
        let q = AtmosphereQuantities::from(state);
        Self {
            temperature: q.temperature.get::<kelvin>(),
            pressure: q.pressure.get::<pascal>(),
            density: q.density.get::<kilogram_per_cubic_meter>(),
            speed_of_sound: q.speed_of_sound.get::<meter_per_second>(),
            dynamic_viscosity: q.dynamic_viscosity.get::<pascal_second>(),
            kinematic_viscosity: q.kinematic_viscosity.get::<square_meter_per_second>(),
        }
    }
}

impl AtmosphereReport {
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => write_json(out, self),
            OutputFormat::Table => {
                writeln!(out, "T = {:.2} K", self.temperature)?;
                writeln!(out, "p = {:.2} Pa", self.pressure)?;
                writeln!(out, "rho = {:.4} kg/m^3", self.density)?;
                writeln!(out, "a = {:.2} m/s", self.speed_of_sound)?;
                let mu = Scientific(self.dynamic_viscosity, 6);
                writeln!(out, "mu = {mu} Pa·s")?;
                let nu = Scientific(self.kinematic_viscosity, 6);
                writeln!(out, "nu = {nu} m^2/s")?;
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AerodynamicReport {
    #[serde(rename = "TAS_m_per_s")]
    pub true_airspeed: f64,
    #[serde(rename = "EAS_m_per_s")]
    pub equivalent_airspeed: f64,
    pub mach: f64,
    pub reynolds: f64,
    #[serde(rename = "dynamic_pressure_Pa")]
    pub dynamic_pressure: f64,
    #[serde(rename = "stagnation_pressure_Pa")]
    pub stagnation_pressure: f64,
}

impl From<&AerodynamicState> for AerodynamicReport {
    fn from(state: &AerodynamicState) -> Self {
        let q = AerodynamicQuantities::from(state);
        Self {
            true_airspeed: q.true_airspeed.get::<meter_per_second>(),
            equivalent_airspeed: q.equivalent_airspeed.get::<meter_per_second>(),
            mach: q.mach.get::<ratio>(),
            reynolds: q.reynolds.get::<ratio>(),
            dynamic_pressure: q.dynamic_pressure.get::<pascal>(),
            stagnation_pressure: q.stagnation_pressure.get::<pascal>(),
        }
    }
}

impl AerodynamicReport {
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => write_json(out, self),
            OutputFormat::Table => {
                writeln!(out, "TAS = {:.2} m/s", self.true_airspeed)?;
                writeln!(out, "EAS = {:.2} m/s", self.equivalent_airspeed)?;
                writeln!(out, "Mach = {:.4}", self.mach)?;
                writeln!(out, "Reynolds = {}", Scientific(self.reynolds, 2))?;
                writeln!(out, "q = {:.2} Pa", self.dynamic_pressure)?;
                writeln!(out, "p0 = {:.2} Pa", self.stagnation_pressure)?;
                Ok(())
            }
        }
    }
}

/// Scientific notation with a signed exponent of at least two digits, as in
/// `1.789380e-05` or `6.85e+06`.
struct Scientific(f64, usize);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(value, precision) = *self;
        let formatted = format!("{value:.precision$e}");

        match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&formatted),
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
