//! Generate an assessment payload for validation testing

use somascale::report::AssessmentEncoder;
use somascale::{assess, Measurement};

fn main() {
    let measurement = match Measurement::new(180.0, 95.0) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {e:?}");
            return;
        }
    };
    let result = assess(&measurement);

    match AssessmentEncoder::new().encode_to_json(&measurement, &result) {
        Ok(json) => print!("{json}"),
        Err(e) => eprintln!("Error: {e:?}"),
    }
}
