use crate::demo::{run_demo, run_register, DemoArgs, RegisterArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use user_onboarding::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "User Onboarding",
    about = "Register users against client credit policy from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Register a single user against the seeded demo clients
    Register(RegisterArgs),
    /// Run scripted registrations covering every client tier and gate
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Register(args) => run_register(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_when_no_subcommand() {
        let cli = Cli::try_parse_from(["user-onboarding"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_register_arguments() {
        let cli = Cli::try_parse_from([
            "user-onboarding",
            "register",
            "--first-name",
            "Anna",
            "--last-name",
            "Ator",
            "--email",
            "a@b.com",
            "--date-of-birth",
            "2000-01-31",
            "--client-id",
            "2",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Register(args)) => {
                assert_eq!(args.client_id, 2);
                assert_eq!(args.date_of_birth.to_string(), "2000-01-31");
                assert!(args.today.is_none());
            }
            other => panic!("expected register command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_birth_date() {
        let result = Cli::try_parse_from([
            "user-onboarding",
            "register",
            "--first-name",
            "Anna",
            "--last-name",
            "Ator",
            "--email",
            "a@b.com",
            "--date-of-birth",
            "31/01/2000",
            "--client-id",
            "2",
        ]);
        assert!(result.is_err());
    }
}
