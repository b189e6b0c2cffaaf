use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy gdp_states.csv to OUT_DIR for include_str
    let fixture = Path::new("../fixtures/gdp_states.csv");
    let dest = Path::new(&out_dir).join("gdp_states.csv");
    if fixture.exists() {
        fs::copy(fixture, dest).unwrap();
        println!("cargo:rerun-if-changed=../fixtures/gdp_states.csv");
    } else {
        // Minimal sample so the app still builds from a bare checkout.
        fs::write(
            dest,
            "state,region,gdp,gdp_per_capita,population,municipalities\n\
             São Paulo,Sudeste,2719751000000,58540,46649132,645\n\
             Bahia,Nordeste,352618000000,23610,14985284,417\n",
        )
        .unwrap();
    }
}
