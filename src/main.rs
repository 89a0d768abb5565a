#[macro_use] extern crate log;

use clap::Parser;
use gammu_outbox::{pool, Injector, Store, StoreConfig};
use std::process;

/// Queue an SMS in the Gammu SMSD outbox.
#[derive(Parser, Debug)]
#[command(name = "gammu-inject", version)]
struct Cli {
    #[command(flatten)]
    store: StoreConfig,
    /// Higher priorities are sent first.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    priority: i32,
    /// Send as a flash (class 0) message.
    #[arg(long)]
    flash: bool,
    /// Destination number, e.g. +15415553010.
    destination: String,
    /// Message text; words are joined with single spaces.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    message: Vec<String>
}

fn run(cli: Cli) -> Result<i32, failure::Error> {
    let store = Store::new(pool::build_pool(&cli.store)?);
    let conn = store.get_conn()?;
    let mut injector = Injector::new(cli.store.creator_id.as_str());
    let body = cli.message.join(" ");
    let id = injector.send(&*conn, &cli.destination, &body, cli.priority, cli.flash)?;
    Ok(id)
}
fn main() {
    dotenv::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(id) => {
            println!("{}", id);
        },
        Err(e) => {
            error!("Failed to inject message: {}", e);
            for cause in e.iter_causes() {
                error!("  caused by: {}", cause);
            }
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["gammu-inject", "--database-url", "postgres://smsd@localhost/smsd"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn message_may_start_with_a_hyphen() {
        let cli = parse(&["+15415553010", "-> running late"]);
        assert_eq!(cli.destination, "+15415553010");
        assert_eq!(cli.message, vec!["-> running late".to_string()]);
    }
    #[test]
    fn flags_before_destination_are_still_flags() {
        let cli = parse(&["--flash", "--priority", "-2", "+15415553010", "see", "you", "--soon"]);
        assert!(cli.flash);
        assert_eq!(cli.priority, -2);
        assert_eq!(cli.message.join(" "), "see you --soon");
    }
}
