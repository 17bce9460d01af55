use integrated_sho::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    params: Params,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    #[serde(rename = "log_S0")]
    log_s0: f64,
    #[serde(rename = "log_Q")]
    log_q: f64,
    log_omega0: f64,
    t_exp: f64,
    #[serde(default)]
    lags: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    base_real: Vec<RealCoefficient<f64>>,
    base_complex: Vec<ComplexCoefficient<f64>>,
    real: Vec<RealCoefficient<f64>>,
    complex: Vec<ComplexCoefficient<f64>>,
    kernel: Vec<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = Path::new("../data");
    let output_dir = Path::new("../output/integrated_sho");

    if !input_dir.exists() {
        eprintln!("Input directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;
    let p = &data.params;

    let term = IntegratedSho::new()
        .log_s0(p.log_s0)
        .log_q(p.log_q)
        .log_omega0(p.log_omega0)
        .t_exp(p.t_exp)
        .build()?;

    data.result = ResultData {
        base_real: term.base().real_coefficients()?,
        base_complex: term.base().complex_coefficients()?,
        real: term.real_coefficients()?,
        complex: term.complex_coefficients()?,
        kernel: p
            .lags
            .iter()
            .map(|&tau| term.value(tau))
            .collect::<Result<_, _>>()?,
    };

    let file_name = input_path.file_name().ok_or("input path has no file name")?;
    let output_path = output_dir.join(file_name);
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(())
}
