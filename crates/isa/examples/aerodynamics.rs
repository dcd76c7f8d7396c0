//! Airspeed conversions, Mach and Reynolds numbers across altitude.

use isa_toolkit::{
    AltitudeKind, IsaError, SpeedKind, compute_aerodynamic_state, compute_aerodynamic_states,
    query_atmosphere,
};
use ndarray::array;
use uom::si::{f64::Velocity, velocity::{knot, meter_per_second}};

fn main() -> Result<(), IsaError> {
    println!("ISA Toolkit - Aerodynamics Examples");
    println!("{}", "=".repeat(40));

    println!("\n1. Airspeed Conversions at 10000m:");
    println!("{}", "-".repeat(40));
    println!(
        "{:>10} {:>10} {:>8} {:>12}",
        "TAS [m/s]", "EAS [m/s]", "Mach", "Re (L=1m)"
    );
    println!("{}", "-".repeat(42));
    let cruise = query_atmosphere(10_000.0, AltitudeKind::Geometric)?;
    let speeds = array![50.0, 100.0, 150.0, 200.0, 250.0];
    let sweep = compute_aerodynamic_states(&speeds, SpeedKind::Tas, &cruise, 1.0)?;
    for index in 0..sweep.len() {
        println!(
            "{:10.0} {:10.1} {:8.4} {:12.2e}",
            sweep.true_airspeed[index],
            sweep.equivalent_airspeed[index],
            sweep.mach[index],
            sweep.reynolds[index]
        );
    }

    println!("\n2. Altitude Effects on Aerodynamics:");
    println!("{}", "-".repeat(40));
    println!("Fixed TAS = 150 m/s, varying altitude");
    println!(
        "{:>8} {:>10} {:>10} {:>8} {:>10}",
        "Alt [m]", "TAS [m/s]", "EAS [m/s]", "Mach", "q [Pa]"
    );
    println!("{}", "-".repeat(48));
    let profile = query_atmosphere(
        array![0.0, 5_000.0, 10_000.0, 15_000.0, 20_000.0],
        AltitudeKind::Geometric,
    )?;
    let fixed = compute_aerodynamic_states(150.0, SpeedKind::Tas, &profile, 1.0)?;
    for (index, state) in profile.iter().enumerate() {
        println!(
            "{:8.0} {:10.1} {:10.1} {:8.4} {:10.0}",
            state.geometric_altitude,
            fixed.true_airspeed[index],
            fixed.equivalent_airspeed[index],
            fixed.mach[index],
            fixed.dynamic_pressure[index]
        );
    }

    println!("\n3. Mach Number Calculations:");
    println!("{}", "-".repeat(35));
    println!("Various Mach numbers at 10,000 m altitude");
    println!(
        "{:>6} {:>10} {:>10} {:>10} {:>10}",
        "Mach", "TAS [m/s]", "TAS [kt]", "q [kPa]", "p₀ [kPa]"
    );
    println!("{}", "-".repeat(48));
    for mach in [0.3, 0.5, 0.7, 0.85, 0.95] {
        let aero = compute_aerodynamic_state(mach, SpeedKind::Mach, &cruise, 1.0);
        let knots = Velocity::new::<meter_per_second>(aero.true_airspeed).get::<knot>();
        println!(
            "{:6.2} {:10.1} {:10.1} {:10.2} {:10.2}",
            mach,
            aero.true_airspeed,
            knots,
            aero.dynamic_pressure / 1000.0,
            aero.stagnation_pressure / 1000.0
        );
    }

    println!("\n4. Reynolds Number Analysis:");
    println!("{}", "-".repeat(35));
    println!("Effect of characteristic length and altitude");
    println!("{:>10} {:>8} {:>12}", "Chord [m]", "Alt [m]", "Reynolds");
    println!("{}", "-".repeat(42));
    let chords = array![0.5, 1.0, 2.0, 5.0];
    for altitude in [0.0, 10_000.0] {
        let atmosphere = query_atmosphere(altitude, AltitudeKind::Geometric)?;
        let aero = compute_aerodynamic_states(100.0, SpeedKind::Tas, &atmosphere, &chords)?;
        for (chord, reynolds) in chords.iter().zip(aero.reynolds.iter()) {
            println!("{chord:10.1} {altitude:8.0} {reynolds:12.2e}");
        }
    }

    Ok(())
}
