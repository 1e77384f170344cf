use anyhow::Result;
use clap::{Parser, Subcommand};
mod auth;
use cryptio::{Cryptio, ResourceProfile, SecurityLevel, resolve};

#[derive(Debug, clap::Args)]
struct ConfigArgs {
    /// Security level: UltraFast, Standard, Medium, High, Extreme
    #[arg(long, env = "CRYPTIO_LEVEL")]
    level: SecurityLevel,

    /// Resource profile: RAMHeavy, Balanced, Tradeoff, CPUFavor, CPUHeavy
    #[arg(long, env = "CRYPTIO_PROFILE")]
    profile: ResourceProfile,
}

#[derive(Debug, Parser)]
#[command(name = "cryptio")]
#[command(
    version,
    about = "Passphrase-based authenticated encryption with tunable Argon2id cost."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encrypts text and prints the base64 token
    #[command(arg_required_else_help = true)]
    Encrypt {
        #[command(flatten)]
        config: ConfigArgs,
        text: String,
    },

    /// Decrypts a base64 token and prints the plaintext
    #[command(arg_required_else_help = true)]
    Decrypt {
        #[command(flatten)]
        config: ConfigArgs,
        token: String,
    },

    /// Shows the resolved parameter set for a level/profile combination
    Params {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    match args.command {
        Commands::Encrypt { config, text } => {
            let passphrase = auth::read_passphrase()?;
            let client = Cryptio::new(passphrase.as_bytes(), config.level, config.profile);
            println!("{}", client.encrypt(&text)?);
        }
        Commands::Decrypt { config, token } => {
            let passphrase = auth::read_passphrase()?;
            let client = Cryptio::new(passphrase.as_bytes(), config.level, config.profile);
            println!("{}", &*client.decrypt(&token)?);
        }
        Commands::Params { config } => {
            let params = resolve(config.level, config.profile);
            println!("level:        {}", config.level);
            println!("profile:      {}", config.profile);
            println!("salt length:  {} bytes", params.salt_len);
            println!("key length:   {} bytes", params.key_len);
            println!("nonce length: {} bytes", params.nonce_len);
            println!("time cost:    {}", params.time_cost);
            println!("memory cost:  {} KiB", params.mem_cost_kib);
            println!("parallelism:  {}", params.parallelism);
        }
    }

    Ok(())
}
