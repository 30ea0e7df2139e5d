//! Schema command - print the batch input and result formats

use super::batch::SalaryInput;
use super::calc::CalcOutput;
use super::PayrollRecord;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// What to print
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema of `calc --json` output
    JsonSchema,
    /// JSON Schema of `compare --json` and `batch --json` rows
    RecordSchema,
    /// JSON Schema of one batch input row
    InputSchema,
    /// CSV header row for batch input
    CsvHeader,
    /// Batch input column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                println!("{}", serde_json::to_string_pretty(&schema_for!(CalcOutput))?)
            }
            SchemaFormat::RecordSchema => {
                println!("{}", serde_json::to_string_pretty(&schema_for!(PayrollRecord))?)
            }
            SchemaFormat::InputSchema => {
                println!("{}", serde_json::to_string_pretty(&schema_for!(SalaryInput))?)
            }
            SchemaFormat::CsvHeader => println!("{}", SalaryInput::csv_header().join(",")),
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
        Ok(())
    }

    fn print_csv_fields(&self) {
        println!("Batch CSV Input Format");
        println!("======================");
        println!();
        for field in SalaryInput::csv_schema() {
            let req = if field.required { "required" } else { "optional" };
            println!("{:14} ({:8})  {}", field.name, req, field.description);
        }
        println!();
        println!("Amounts are GBP per year; negative salaries are treated as 0.");
    }
}
