use integration_tests::harness::{fixture_path, open_fixture};
use pipelog_core::conf::{ConfigLayer, PipelogConfig, load_profile};
use pipelog_core::scan::{Analysis, scan};

#[allow(dead_code)]
pub fn config(layer: ConfigLayer) -> PipelogConfig {
    PipelogConfig::from_layer(layer).expect("fixture config should compile")
}

#[allow(dead_code)]
pub fn profile_config(name: &str) -> PipelogConfig {
    let layer = load_profile(&fixture_path(name)).expect("fixture profile should load");
    config(layer)
}

#[allow(dead_code)]
pub fn analyze(fixture: &str, config: &PipelogConfig) -> Analysis {
    scan(open_fixture(fixture), config).expect("fixture should scan")
}

#[allow(dead_code)]
pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
