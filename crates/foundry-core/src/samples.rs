// File: crates/foundry-core/src/samples.rs
// Summary: Built-in sample datasets offered on "load sample", one per chart family.

use crate::dataset::{Dataset, Record};
use crate::variant::ChartVariant;

fn named(rows: &[(&str, f64)]) -> Dataset {
    rows.iter()
        .map(|&(name, value)| Record::new().with("name", name).with("value", value))
        .collect::<Vec<_>>()
        .into()
}

pub fn sample_dataset(variant: ChartVariant) -> Dataset {
    match variant {
        ChartVariant::Bar | ChartVariant::Line | ChartVariant::Area => named(&[
            ("Jan", 120.0),
            ("Feb", 200.0),
            ("Mar", 150.0),
            ("Apr", 80.0),
            ("May", 70.0),
            ("Jun", 110.0),
        ]),
        ChartVariant::Scatter => [(10.0, 8.04), (8.0, 6.95), (13.0, 7.58), (9.0, 8.81), (11.0, 8.33), (14.0, 9.96)]
            .iter()
            .map(|&(x, y)| Record::new().with("x", x).with("y", y))
            .collect::<Vec<_>>()
            .into(),
        ChartVariant::Pie => named(&[
            ("Search", 1048.0),
            ("Direct", 735.0),
            ("Email", 580.0),
            ("Ads", 484.0),
            ("Video", 300.0),
        ]),
        ChartVariant::Funnel => named(&[
            ("Visit", 100.0),
            ("Inquiry", 80.0),
            ("Order", 60.0),
            ("Click", 40.0),
            ("Show", 20.0),
        ]),
        ChartVariant::Radar => named(&[
            ("Sales", 4200.0),
            ("Administration", 3000.0),
            ("Technology", 20000.0),
            ("Support", 35000.0),
            ("Development", 50000.0),
            ("Marketing", 18000.0),
        ]),
        ChartVariant::Gauge => named(&[("Score", 72.0)]),
        ChartVariant::Heatmap => named(&[
            ("Mon", 5.0),
            ("Tue", 1.0),
            ("Wed", 0.0),
            ("Thu", 7.0),
            ("Fri", 3.0),
            ("Sat", 9.0),
            ("Sun", 2.0),
        ]),
    }
}
