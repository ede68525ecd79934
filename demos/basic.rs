use real_besselk::*;

fn main() {
    // -- Orders 0 and 1 --
    println!("=== K_0 and K_1 (f64) ===");
    for x in [0.1_f64, 1.0, 5.0] {
        let k0 = besselk0(x).unwrap();
        let k1 = besselk1(x).unwrap();
        println!("K_0({x}) = {k0:.16e}   K_1({x}) = {k1:.16e}");
    }

    // -- One order per evaluation regime --
    println!("\n=== K_nu(x) across regimes ===");
    let points = [
        (3.0_f64, 2.0),  // integer order: recurrence
        (2.5, 2.0),      // half-integer order: closed form
        (0.3, 0.5),      // small argument: power series
        (2.7, 10.0),     // continued fraction
        (50.3, 1.0),     // large order: asymptotic expansion
    ];
    for (nu, x) in points {
        let k = besselk(nu, x).unwrap();
        println!("K_{nu}({x}) = {k:.16e}");
    }

    // -- Scaled computation --
    println!("\n=== Scaled functions ===");
    let x = 800.0_f64;
    let k = besselk(1.5, x).unwrap();
    let k_sc = besselk_scaled(1.5, x).unwrap();
    println!("K_1.5({x})        = {k:e}  (underflows)");
    println!("exp(x)*K_1.5({x}) = {k_sc:.16e}");

    let k_raw = besselk_raw(1.5, 2.0, Scaling::Exponential).unwrap();
    println!("besselk_raw(1.5, 2, Exponential) = {k_raw:.16e}");

    // -- Boundaries and errors --
    println!("\n=== Boundaries and errors ===");
    println!("K_2(0)   = {}", besselk(2.0_f64, 0.0).unwrap());
    println!("K_2(inf) = {}", besselk(2.0_f64, f64::INFINITY).unwrap());
    match besselk0(0.0_f64) {
        Ok(v) => println!("K_0(0) = {v}"),
        Err(e) => println!("K_0(0): {e}"),
    }
    match besselk(1.0_f64, -2.0) {
        Ok(v) => println!("K_1(-2) = {v}"),
        Err(e) => println!("K_1(-2): {e}"),
    }

    // -- f32 support --
    println!("\n=== f32 support ===");
    let k32 = besselk(2.7_f32, 10.0).unwrap();
    println!("K_2.7(10) = {k32:e} (f32)");
    println!(
        "Debye terms: f64 = {}, f32 = {}",
        f64::PRECISION.debye_terms(),
        f32::PRECISION.debye_terms()
    );
}
