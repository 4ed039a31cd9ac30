use clap::Parser;
use log::error;
use std::process;

use guid_sid::guid_to_sid;

/// Convert a Microsoft encoded GUID to its stored-byte hex literal.
#[derive(Debug, Parser)]
struct Opt {
    /// The guid to convert.
    #[clap(long, default_value = "")]
    guid: String,
}

fn main() {
    env_logger::init();

    let opt = Opt::parse();

    if opt.guid.is_empty() {
        println!("No guid given!");
        return;
    }

    match guid_to_sid(&opt.guid) {
        Ok(sid) => println!("{}", sid),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
