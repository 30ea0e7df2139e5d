use clap::{Parser, Subcommand};

mod cmd;
mod money;
mod tax;

#[derive(Parser, Debug)]
#[command(name = "paye", version, about = "Estimate UK take-home pay from a gross annual salary")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take-home pay for one salary in one tax year
    Calc(cmd::calc::CalcCommand),
    /// One salary across every supported tax year
    Compare(cmd::compare::CompareCommand),
    /// Take-home pay for every salary in a CSV file
    Batch(cmd::batch::BatchCommand),
    /// Show the income tax and NI parameters for each tax year
    Years(cmd::years::YearsCommand),
    /// Print the batch input and result formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calc(cmd) => cmd.exec(),
        Command::Compare(cmd) => cmd.exec(),
        Command::Batch(cmd) => cmd.exec(),
        Command::Years(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
