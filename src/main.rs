use clap::Parser;
use rgb2bw::utils::{logger, validation::Validate};
use rgb2bw::{CliConfig, ConvertEngine, ConvertError, GrayscalePipeline, LumaConverter};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let pipeline = GrayscalePipeline::new(config, LumaConverter);
    let engine = ConvertEngine::new(pipeline);

    match engine.run() {
        Ok(outcome) => println!("Saved: {}", outcome.output_path.display()),
        Err(e) => fail(&e),
    }
}

fn fail(e: &ConvertError) -> ! {
    tracing::debug!("Conversion failed: {:?}", e);
    eprintln!("{}", e);
    if let Some(suggestion) = e.recovery_suggestion() {
        eprintln!("{}", suggestion);
    }
    std::process::exit(1);
}
