//! soma CLI - Command-line interface for somascale
//!
//! Commands:
//! - compute: Assess a single height/weight pair
//! - run: Process streaming NDJSON measurements from stdin
//! - categories: Print the category guidance table
//! - schema: Print schema information
//! - doctor: Diagnose engine health and configuration

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use somascale::report::AssessmentEncoder;
use somascale::types::{BmiCategory, Measurement};
use somascale::{assess, compute_bmi, ASSESSMENT_VERSION, ENGINE_VERSION, PRODUCER_NAME};

/// soma - On-device compute engine for body mass index assessment
#[derive(Parser)]
#[command(name = "soma")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Assess body mass index from height and weight", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a single height/weight pair
    Compute {
        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Process streaming NDJSON measurements from stdin
    Run {
        /// Output format (one record per line for json)
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        /// Flush output after each record
        #[arg(long, default_value = "true")]
        flush: bool,
    },

    /// Print the category guidance table
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,

        /// Output as JSON schema
        #[arg(long)]
        json_schema: bool,
    },

    /// Diagnose engine health and configuration
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input schema (measurement)
    Input,
    /// Output schema (bmi.assessment.v1)
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SomaCliError> {
    match cli.command {
        Commands::Compute {
            height,
            weight,
            format,
        } => cmd_compute(height, weight, format),

        Commands::Run { format, flush } => cmd_run(format, flush),

        Commands::Categories { json } => cmd_categories(json),

        Commands::Schema {
            schema_type,
            json_schema,
        } => cmd_schema(schema_type, json_schema),

        Commands::Doctor { json } => cmd_doctor(json),
    }
}

fn cmd_compute(height: f64, weight: f64, format: OutputFormat) -> Result<(), SomaCliError> {
    let measurement = Measurement::new(height, weight)?;
    let result = assess(&measurement);
    let encoder = AssessmentEncoder::new();

    match format {
        OutputFormat::Text => {
            let info = result.category.guidance();
            println!("BMI Assessment");
            println!("==============");
            println!("Height:   {} cm", measurement.height_cm);
            println!("Weight:   {} kg", measurement.weight_kg);
            println!("BMI:      {:.1}", result.value);
            println!(
                "Category: {} ({})",
                result.category.as_str(),
                info.range
            );
            println!();
            println!("{}", info.description);
            println!();
            println!("Tips:");
            for tip in info.tips {
                println!("  - {}", tip);
            }
        }
        OutputFormat::Json => {
            let payload = encoder.encode(&measurement, &result);
            println!("{}", serde_json::to_string(&payload)?);
        }
        OutputFormat::JsonPretty => {
            println!("{}", encoder.encode_to_json(&measurement, &result)?);
        }
    }

    Ok(())
}

fn cmd_run(format: OutputFormat, flush: bool) -> Result<(), SomaCliError> {
    let encoder = AssessmentEncoder::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let measurement = parse_measurement_line(trimmed)?;
        let result = assess(&measurement);

        let output = match format {
            OutputFormat::Text => {
                let info = result.category.guidance();
                format!(
                    "{} cm / {} kg -> BMI {:.1} ({})",
                    measurement.height_cm,
                    measurement.weight_kg,
                    result.value,
                    info.range
                )
            }
            OutputFormat::Json => {
                serde_json::to_string(&encoder.encode(&measurement, &result))?
            }
            OutputFormat::JsonPretty => encoder.encode_to_json(&measurement, &result)?,
        };

        writeln!(stdout, "{}", output)?;
        if flush {
            stdout.flush()?;
        }
    }

    Ok(())
}

fn cmd_categories(json: bool) -> Result<(), SomaCliError> {
    if json {
        let table: serde_json::Value = BmiCategory::ALL
            .iter()
            .map(|c| (c.as_str().to_string(), serde_json::json!(c.guidance())))
            .collect::<serde_json::Map<String, serde_json::Value>>()
            .into();
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        println!("BMI Categories");
        println!("==============");
        for category in BmiCategory::ALL {
            let info = category.guidance();
            println!();
            println!("{} ({})", category.as_str(), info.range);
            println!("  {}", info.description);
            for tip in info.tips {
                println!("  - {}", tip);
            }
        }
    }

    Ok(())
}

fn cmd_schema(schema_type: SchemaType, json_schema: bool) -> Result<(), SomaCliError> {
    match schema_type {
        SchemaType::Input => {
            if json_schema {
                println!("{}", get_input_json_schema());
            } else {
                println!("Input Schema: measurement");
                println!();
                println!("One JSON object per line (NDJSON) with two fields:");
                println!();
                println!("  height_cm - height in centimeters (positive, finite)");
                println!("  weight_kg - weight in kilograms (non-negative, finite)");
                println!();
                println!("Typical slider bounds: height 120-220 cm, weight 30-150 kg.");
                println!("The engine itself accepts any positive height.");
            }
        }
        SchemaType::Output => {
            if json_schema {
                println!("{}", get_output_json_schema());
            } else {
                println!("Output Schema: {}", ASSESSMENT_VERSION);
                println!();
                println!("Assessment output contains:");
                println!();
                println!("- schema_version: Schema version ({})", ASSESSMENT_VERSION);
                println!("- producer: {{ name, version, instance_id }}");
                println!("- provenance: {{ computed_at_utc }}");
                println!("- measurement: {{ height_cm, weight_kg }}");
                println!("- result: {{ value, category }}");
                println!("  - value: BMI rounded to one decimal place");
                println!("  - category: underweight | normal | overweight | obese");
                println!("- guidance: {{ range, description, tips }}");
            }
        }
    }

    Ok(())
}

fn cmd_doctor(json: bool) -> Result<(), SomaCliError> {
    let mut checks: Vec<DoctorCheck> = Vec::new();

    checks.push(DoctorCheck {
        name: "engine_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("somascale version {}", ENGINE_VERSION),
    });

    checks.push(DoctorCheck {
        name: "schema_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Output schema: {}", ASSESSMENT_VERSION),
    });

    // Engine self-check against a known scenario
    let self_check = match compute_bmi(170.0, 70.0) {
        Ok(result) if result.value == 24.2 && result.category == BmiCategory::Normal => {
            DoctorCheck {
                name: "engine".to_string(),
                status: CheckStatus::Ok,
                message: "Self-check (170 cm / 70 kg -> 24.2 normal) passed".to_string(),
            }
        }
        Ok(result) => DoctorCheck {
            name: "engine".to_string(),
            status: CheckStatus::Error,
            message: format!(
                "Self-check returned {:.1} {}",
                result.value,
                result.category.as_str()
            ),
        },
        Err(e) => DoctorCheck {
            name: "engine".to_string(),
            status: CheckStatus::Error,
            message: format!("Self-check failed: {}", e),
        },
    };
    checks.push(self_check);

    let stdin_check = if atty::is(atty::Stream::Stdin) {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a TTY (interactive mode)".to_string(),
        }
    } else {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a pipe (streaming mode ready)".to_string(),
        }
    };
    checks.push(stdin_check);

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: ENGINE_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Soma Doctor Report");
        println!("==================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(SomaCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

// Helper functions

fn parse_measurement_line(line: &str) -> Result<Measurement, SomaCliError> {
    let parsed: Measurement = serde_json::from_str(line)
        .map_err(|e| SomaCliError::ParseError(format!("Failed to parse measurement: {}", e)))?;
    Measurement::new(parsed.height_cm, parsed.weight_kg).map_err(SomaCliError::Compute)
}

fn get_input_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "measurement",
        "description": "somascale measurement input",
        "type": "object",
        "required": ["height_cm", "weight_kg"],
        "properties": {
            "height_cm": { "type": "number", "exclusiveMinimum": 0 },
            "weight_kg": { "type": "number", "minimum": 0 }
        }
    })
    .to_string()
}

fn get_output_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": ASSESSMENT_VERSION,
        "description": "somascale assessment output",
        "type": "object",
        "required": ["schema_version", "producer", "provenance", "measurement", "result", "guidance"],
        "properties": {
            "schema_version": { "type": "string", "const": ASSESSMENT_VERSION },
            "producer": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "version": { "type": "string" },
                    "instance_id": { "type": "string" }
                }
            },
            "provenance": {
                "type": "object",
                "properties": {
                    "computed_at_utc": { "type": "string", "format": "date-time" }
                }
            },
            "measurement": {
                "type": "object",
                "properties": {
                    "height_cm": { "type": "number" },
                    "weight_kg": { "type": "number" }
                }
            },
            "result": {
                "type": "object",
                "properties": {
                    "value": { "type": "number" },
                    "category": {
                        "type": "string",
                        "enum": ["underweight", "normal", "overweight", "obese"]
                    }
                }
            },
            "guidance": {
                "type": "object",
                "properties": {
                    "range": { "type": "string" },
                    "description": { "type": "string" },
                    "tips": { "type": "array", "items": { "type": "string" } }
                }
            }
        }
    })
    .to_string()
}

// Error types

#[derive(Debug)]
enum SomaCliError {
    Io(io::Error),
    Compute(somascale::ComputeError),
    Json(serde_json::Error),
    ParseError(String),
    DoctorFailed,
}

impl From<io::Error> for SomaCliError {
    fn from(e: io::Error) -> Self {
        SomaCliError::Io(e)
    }
}

impl From<somascale::ComputeError> for SomaCliError {
    fn from(e: somascale::ComputeError) -> Self {
        SomaCliError::Compute(e)
    }
}

impl From<serde_json::Error> for SomaCliError {
    fn from(e: serde_json::Error) -> Self {
        SomaCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<SomaCliError> for CliError {
    fn from(e: SomaCliError) -> Self {
        match e {
            SomaCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            SomaCliError::Compute(e) => CliError {
                code: "COMPUTE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Height must be positive, weight non-negative".to_string()),
            },
            SomaCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            SomaCliError::ParseError(msg) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: msg,
                hint: Some("Expected NDJSON lines like {\"height_cm\": 170, \"weight_kg\": 70}".to_string()),
            },
            SomaCliError::DoctorFailed => CliError {
                code: "DOCTOR_FAILED".to_string(),
                message: "One or more health checks failed".to_string(),
                hint: Some("Review the doctor report for details".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(serde::Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(serde::Serialize)]
enum CheckStatus {
    Ok,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measurement_line() {
        let m = parse_measurement_line(r#"{"height_cm": 170, "weight_kg": 70}"#).unwrap();
        assert_eq!(m.height_cm, 170.0);
        assert_eq!(m.weight_kg, 70.0);
    }

    #[test]
    fn test_parse_measurement_line_rejects_garbage() {
        assert!(parse_measurement_line("not json").is_err());
        assert!(parse_measurement_line(r#"{"height_cm": 170}"#).is_err());
    }

    #[test]
    fn test_parse_measurement_line_rejects_out_of_domain() {
        let err = parse_measurement_line(r#"{"height_cm": 0, "weight_kg": 70}"#);
        assert!(matches!(err, Err(SomaCliError::Compute(_))));
    }

    #[test]
    fn test_schemas_are_valid_json() {
        let input: serde_json::Value = serde_json::from_str(&get_input_json_schema()).unwrap();
        assert_eq!(input["title"], "measurement");

        let output: serde_json::Value = serde_json::from_str(&get_output_json_schema()).unwrap();
        assert_eq!(output["title"], ASSESSMENT_VERSION);
    }
}
