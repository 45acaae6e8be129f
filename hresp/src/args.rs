use clap::{ArgAction, Parser};

use crate::config::Config;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about)]
pub struct Args {
    #[arg(default_value_t = 200, help = "the status code to send")]
    pub status: u16,

    #[arg(
        short = 'H',
        long = "header",
        help = "a raw header line, e.g. 'Content-Type: text/html'. can be given multiple times"
    )]
    pub headers: Vec<String>,

    #[arg(short, long, conflicts_with = "file", help = "the response body")]
    pub body: Option<String>,

    #[arg(short, long, help = "stream the response body from this file")]
    pub file: Option<String>,

    #[arg(
        short,
        long,
        help = "send a redirect to the given url instead of a body"
    )]
    pub redirect: Option<String>,

    #[arg(short, long, help = "redirect output to the specified file")]
    pub out: Option<String>,

    #[arg(short, long, action = ArgAction::Count, help = "sets the level of verbosity")]
    pub verbose: u8,

    #[arg(short, long, help = "suppress log outputs")]
    pub quiet: bool,
}

impl From<Args> for Config {
    fn from(val: Args) -> Self {
        Config::new(1 + val.verbose, val.quiet)
    }
}
