use anyhow::Result;
use clap::{Parser, Subcommand};
use sigcodec::{
    create_type_signature, method_signature_to_string, signature_to_string,
    type_signature_to_string,
};

#[derive(Parser)]
#[command(name = "sigcodec")]
#[command(about = "Encode and decode compact type/method signature strings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a type name into its compact signature
    Encode {
        /// Type name, e.g. "java.lang.String" or "int[]"
        #[arg(value_name = "NAME")]
        name: String,

        /// Treat the name as fully qualified (resolved)
        #[arg(short, long)]
        resolved: bool,
    },

    /// Decode a type or method signature into a readable string
    Decode {
        /// Signature, e.g. "[Ljava.lang.String;" or "(I)V"
        #[arg(value_name = "SIGNATURE")]
        signature: String,

        /// Keep package qualifiers in the output
        #[arg(short, long)]
        qualified: bool,
    },

    /// Render a method signature with a name and parameter names
    Method {
        /// Method signature, e.g. "([Ljava.lang.String;)V"
        #[arg(value_name = "SIGNATURE")]
        signature: String,

        /// Method name to insert in the result
        #[arg(short, long)]
        name: Option<String>,

        /// Parameter names, one per parameter type
        #[arg(short, long = "param-name")]
        param_names: Vec<String>,

        /// Keep package qualifiers in the output
        #[arg(short, long)]
        qualified: bool,

        /// Omit the return type from the output
        #[arg(long)]
        no_return_type: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode { name, resolved } => {
            println!("{}", create_type_signature(name, *resolved)?);
        }
        Commands::Decode { signature, qualified } => {
            log::debug!("decoding signature: {signature}");
            let rendered = if signature.starts_with('(') || signature.starts_with('<') {
                method_signature_to_string(signature, None, None, *qualified, true)?
            } else {
                type_signature_to_string(signature, *qualified)?
            };
            println!("{rendered}");
        }
        Commands::Method { signature, name, param_names, qualified, no_return_type } => {
            log::debug!("rendering method signature: {signature}");
            let names: Vec<&str> = param_names.iter().map(String::as_str).collect();
            let rendered = method_signature_to_string(
                signature,
                name.as_deref(),
                if names.is_empty() { None } else { Some(&names) },
                *qualified,
                !*no_return_type,
            )?;
            println!("{rendered}");
        }
    }

    Ok(())
}
