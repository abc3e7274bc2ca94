use anyhow::Context;
use apwgen::utils::{logger, validation::Validate};
use apwgen::{CliConfig, PassphraseGenerator};
use clap::Parser;
use std::io::Write;

// argparse 的使用錯誤也是以 2 結束
const USAGE_ERROR: i32 = 2;

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.load_profile() {
        tracing::debug!("Profile rejected: {}", e);
        eprintln!("apwgen: error: {}", e.user_friendly_message());
        eprintln!("{}", e.recovery_suggestion());
        std::process::exit(USAGE_ERROR);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::debug!("Options rejected: {}", e);
        eprintln!("apwgen: error: {}", e.user_friendly_message());
        std::process::exit(USAGE_ERROR);
    }

    let generator = PassphraseGenerator::from_provider(&config);
    let mut stdout = std::io::stdout().lock();
    for (index, result) in generator.run().into_iter().enumerate() {
        match result {
            Ok(passphrase) => {
                writeln!(stdout, "{}", passphrase).context("Failed to write passphrase")?
            }
            Err(e) => eprintln!("Error generating passphrase {}: {}", index + 1, e),
        }
    }

    Ok(())
}
