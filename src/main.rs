extern crate pretty_env_logger;

#[macro_use]
extern crate log;

use clap::Parser;

mod ablib;

use ablib::{stage1_main, wlda6_main, AnnotabParams, ArgParser, Commands};

fn main() {
    let args = ArgParser::parse();
    let params: &dyn AnnotabParams = match &args.command {
        Commands::Stage1(args) => args,
        Commands::Wlda6(args) => args,
    };
    let level = if params.debug() {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .init();

    info!("starting");
    info!("params: {:#?}", args);
    if !params.validate() {
        error!("please fix arguments");
        std::process::exit(1);
    }

    match args.command {
        Commands::Stage1(args) => stage1_main(args),
        Commands::Wlda6(args) => wlda6_main(args),
    }
    info!("finished");
}
