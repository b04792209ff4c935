//! Composes a rotation with a translation and maps a point through both.
//!
//! Run with `RUST_LOG=debug cargo run --example compose_demo` to see the
//! library's diagnostics.

use dualquat::*;

fn main() -> Result<()> {
    init_logging();

    let rot = DualQuaternion::from_matrix_rows(&[
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 20.0_f64.to_radians().cos(), -20.0_f64.to_radians().sin(), 0.0],
        [0.0, 20.0_f64.to_radians().sin(), 20.0_f64.to_radians().cos(), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])?;
    let trans = DualQuaternion::from_translation_vector(&[1.0, 2.0, 3.0])?;

    // rotate after translating: T_rot * T_trans
    let composed = rot * trans;
    println!("composed:    {composed}");
    println!("unit:        {}", composed.is_unit());
    println!("translation: {:?}", composed.translation().to_array());

    let point = [1.0, 1.0, 0.0];
    let mapped = composed.transform_point_array(&point)?;
    println!("{point:?} -> {mapped:?}");

    let relative = (composed / trans)?;
    println!("composed / trans ≈ rot: {}", relative.approx_eq(&rot));

    let record = composed.to_pose_record();
    println!("pose record: {record:?}");

    // malformed input is reported, not corrected
    if let Err(err) = DualQuaternion::from_homogeneous_matrix(&DMat4::ZERO) {
        log::warn!("rejected matrix: {err}");
    }

    Ok(())
}
