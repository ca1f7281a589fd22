use std::env;
use std::fs;
use std::path::Path;

/// Served when no pipeline snapshot has been dropped into `fixtures/`, so the
/// app still builds and shows an empty dashboard.
const FALLBACK_SNAPSHOT: &str = r#"{
  "parameters": {"date_start": "2024-01-01", "date_end": "2024-01-01"},
  "aoi": {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[]]}, "properties": {"name": "No area loaded"}},
  "timeseries": [],
  "tile_url": "",
  "predictions": {},
  "alerts": []
}
"#;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("dashboard_data.json");

    // Copy the pipeline snapshot to OUT_DIR for include_str
    let snapshot_src = Path::new("../fixtures/dashboard_data.json");
    if snapshot_src.exists() {
        fs::copy(snapshot_src, &dest).unwrap();
    } else {
        println!("cargo:warning=fixtures/dashboard_data.json not found, embedding an empty snapshot");
        fs::write(&dest, FALLBACK_SNAPSHOT).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/dashboard_data.json");
}
