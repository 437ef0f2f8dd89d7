use std::env;
use std::fs;
use std::path::Path;

/// Copy `../fixtures/{name}` into OUT_DIR for `include_str!`, or write
/// `fallback` when the fixture is missing.
fn embed_fixture(out_dir: &Path, name: &str, fallback: &str) {
    let src = Path::new("../fixtures").join(name);
    let dest = out_dir.join(name);
    if src.exists() {
        fs::copy(&src, &dest).unwrap();
    } else {
        println!("cargo:warning=fixtures/{} not found, embedding a one-state sample", name);
        fs::write(&dest, fallback).unwrap();
    }
    println!("cargo:rerun-if-changed=../fixtures/{}", name);
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    embed_fixture(
        out_dir,
        "states.csv",
        "state,count,male_count,population\nColorado,792,681,5541000\n",
    );
    embed_fixture(
        out_dir,
        "cities.csv",
        "key,city,state,lat,lng,count\nden,Denver,Colorado,39.74,-104.99,75\n",
    );
    embed_fixture(
        out_dir,
        "us-states.geojson",
        r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"NAME":"Colorado"},"geometry":{"type":"Polygon","coordinates":[[[-109.05,41.0],[-109.05,37.0],[-102.05,37.0],[-102.05,41.0],[-109.05,41.0]]]}}]}"#,
    );

    println!("cargo:rerun-if-changed=build.rs");
}
