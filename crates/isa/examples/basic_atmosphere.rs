//! Standard atmosphere at sea level, at cruise altitude, and over a profile.

use isa_toolkit::{AltitudeKind, IsaError, query_atmosphere, sea_level_atmosphere};
use ndarray::array;

fn main() -> Result<(), IsaError> {
    println!("ISA Toolkit - Basic Atmosphere Examples");
    println!("{}", "=".repeat(50));

    println!("\n1. Sea Level Conditions:");
    println!("{}", "-".repeat(30));
    let sea_level = sea_level_atmosphere();
    println!(
        "Temperature: {:.2} K ({:.2} °C)",
        sea_level.temperature,
        sea_level.temperature - 273.15
    );
    println!(
        "Pressure: {:.0} Pa ({:.2} kPa)",
        sea_level.pressure,
        sea_level.pressure / 1000.0
    );
    println!("Density: {:.4} kg/m³", sea_level.density);
    println!("Speed of sound: {:.1} m/s", sea_level.speed_of_sound);

    println!("\n2. Atmosphere at 10,000 m (typical cruise altitude):");
    println!("{}", "-".repeat(50));
    let cruise = query_atmosphere(10_000.0, AltitudeKind::Geometric)?;
    println!("Geometric altitude: {:.0} m", cruise.geometric_altitude);
    println!("Geopotential altitude: {:.0} m", cruise.geopotential_altitude);
    println!(
        "Temperature: {:.2} K ({:.2} °C)",
        cruise.temperature,
        cruise.temperature - 273.15
    );
    println!(
        "Pressure: {:.0} Pa ({:.2} kPa)",
        cruise.pressure,
        cruise.pressure / 1000.0
    );
    println!("Density: {:.4} kg/m³", cruise.density);
    println!("Speed of sound: {:.1} m/s", cruise.speed_of_sound);
    println!("Dynamic viscosity: {:.3e} Pa·s", cruise.dynamic_viscosity);
    println!("Kinematic viscosity: {:.3e} m²/s", cruise.kinematic_viscosity);

    println!("\n3. Atmosphere Profile (0 to 20 km):");
    println!("{}", "-".repeat(40));
    let profile = query_atmosphere(
        array![0.0, 5_000.0, 10_000.0, 15_000.0, 20_000.0],
        AltitudeKind::Geometric,
    )?;
    println!(
        "{:>8} {:>8} {:>10} {:>12} {:>9}",
        "Alt [m]", "T [K]", "p [kPa]", "ρ [kg/m³]", "a [m/s]"
    );
    println!("{}", "-".repeat(50));
    for state in profile.iter() {
        println!(
            "{:8.0} {:8.2} {:10.2} {:12.6} {:9.1}",
            state.geometric_altitude,
            state.temperature,
            state.pressure / 1000.0,
            state.density,
            state.speed_of_sound
        );
    }

    println!("\n4. Standard Ratios (relative to sea level):");
    println!("{}", "-".repeat(45));
    println!(
        "{:>8} {:>12} {:>12} {:>12}",
        "Alt [m]", "δ (p/p₀)", "σ (ρ/ρ₀)", "θ (T/T₀)"
    );
    println!("{}", "-".repeat(45));
    for altitude in [5_000.0, 11_000.0, 15_000.0, 20_000.0] {
        let state = query_atmosphere(altitude, AltitudeKind::Geometric)?;
        println!(
            "{:8.0} {:12.6} {:12.6} {:12.6}",
            altitude,
            state.pressure_ratio(),
            state.density_ratio(),
            state.temperature_ratio()
        );
    }

    Ok(())
}
