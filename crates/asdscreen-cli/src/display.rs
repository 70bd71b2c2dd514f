//! Terminal rendering for predictions and the served schema.

use asdscreen_core::{EncoderSet, FeatureKind, SchemaRegistry};
use asdscreen_model::{Label, Prediction};

const BAR_WIDTH: usize = 40;

/// Render one prediction: label, probability, and a confidence bar.
pub fn print_prediction(prediction: &Prediction) {
    let verdict = match prediction.label {
        Label::Positive => "ASD indicated",
        Label::Negative => "ASD not indicated",
    };
    println!("Prediction:  {verdict}");
    println!("Probability: {:.2}", prediction.probability);
    println!("             {}", confidence_bar(prediction.probability));
}

/// Render the served feature order, grouped the way a collection form would
/// present it.
pub fn print_schema(registry: &SchemaRegistry, encoders: &EncoderSet) {
    println!("{} features, in classifier column order:", registry.len());
    for (i, spec) in registry.features().iter().enumerate() {
        match spec.kind {
            FeatureKind::Numeric => {
                let range = match (spec.min, spec.max) {
                    (Some(min), Some(max)) => format!(" [{min}..{max}]"),
                    (Some(min), None) => format!(" [{min}..]"),
                    (None, Some(max)) => format!(" [..{max}]"),
                    (None, None) => String::new(),
                };
                println!("{:3}. {:<18} numeric{range}", i + 1, spec.name);
            }
            FeatureKind::Binary => {
                println!("{:3}. {:<18} binary (Yes/No)", i + 1, spec.name);
            }
            FeatureKind::Categorical => {
                let classes = encoders
                    .get(&spec.name)
                    .map(|e| e.classes().join(", "))
                    .unwrap_or_default();
                println!("{:3}. {:<18} categorical ({classes})", i + 1, spec.name);
            }
        }
    }
}

fn confidence_bar(probability: f64) -> String {
    let filled = (probability.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let mut bar = String::with_capacity(BAR_WIDTH + 2);
    bar.push('[');
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar.push(']');
    bar
}
