use anyhow::Result;
use clap::{arg, command, value_parser, Command};
use costprobe::config::{
    ServiceUrls, DEFAULT_ADMIN_URL, DEFAULT_COSTS_URL, DEFAULT_LOGS_URL, DEFAULT_USERS_URL,
};
use costprobe::execute::run_service_checks;

fn main() -> Result<()> {
    env_logger::init();

    let cmd = Command::new("costprobe")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            command!("run")
                .about("run the built-in checks and write a transcript")
                .arg(
                    arg!(<OUTPUT> "transcript file")
                        .help("file the request/response transcript is written to")
                        .required(true)
                        .value_parser(value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"logs-url" <URL>)
                        .help("base url of the logs service")
                        .required(false)
                        .default_value(DEFAULT_LOGS_URL),
                )
                .arg(
                    arg!(--"users-url" <URL>)
                        .help("base url of the users service")
                        .required(false)
                        .default_value(DEFAULT_USERS_URL),
                )
                .arg(
                    arg!(--"costs-url" <URL>)
                        .help("base url of the costs service")
                        .required(false)
                        .default_value(DEFAULT_COSTS_URL),
                )
                .arg(
                    arg!(--"admin-url" <URL>)
                        .help("base url of the admin service")
                        .required(false)
                        .default_value(DEFAULT_ADMIN_URL),
                ),
        );

    let matches = cmd.get_matches();
    let result = match matches.subcommand() {
        Some(("run", matches)) => {
            let urls = ServiceUrls {
                logs: matches.get_one::<String>("logs-url").unwrap().clone(),
                users: matches.get_one::<String>("users-url").unwrap().clone(),
                costs: matches.get_one::<String>("costs-url").unwrap().clone(),
                admin: matches.get_one::<String>("admin-url").unwrap().clone(),
            };
            run_service_checks(
                matches.get_one::<std::path::PathBuf>("OUTPUT").unwrap(),
                &urls,
            )
        }
        _ => unreachable!("this should've been prevented"),
    };
    return result;
}
