use clap::Parser;

/// Command-line arguments for calc
#[derive(Parser, Debug, Clone)]
#[command(name = "calc")]
#[command(about = "A command-line calculator for basic arithmetic on two numbers")]
#[command(long_about = None)]
#[command(override_usage = "calc [OPTIONS] <operation> <x> <y>")]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format: text or json
    #[arg(long = "output-format", value_name = "FORMAT", default_value = "text")]
    pub output_format: String,

    /// Operation (add, subtract, multiply, divide) followed by the two operands
    ///
    /// The token count is checked by the calculator itself so that a wrong
    /// count is reported as a usage error rather than a clap error.
    #[arg(
        value_name = "TOKEN",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}
