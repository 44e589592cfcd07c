mod generate;

use clap::Parser;

fn main() -> Result<(), generate::GenerateError> {
    generate::run(generate::Args::parse())
}
