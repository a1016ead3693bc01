use dotenv::dotenv;
use log::debug;
use matching_quiz::terminal::{Command, Outcome, Session, HELP_TEXT};
use matching_quiz::{CommandError, QuizConfig};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> HandlerResult {
    // A missing .env is fine, QUIZ_CONFIG and RUST_LOG may come from the shell.
    dotenv().ok();

    pretty_env_logger::init();
    log::info!("Starting matching quiz...");

    let config = QuizConfig::from_env()?;
    let mut session = Session::new(&config);

    println!("{}\n", HELP_TEXT);
    if let Outcome::Continue(board) = session.execute(Command::Show) {
        println!("{}", board);
    }

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };
        debug!("Running {:?}", command);

        match session.execute(command) {
            Outcome::Continue(output) => println!("{}", output),
            Outcome::Quit => break,
        }
    }

    log::info!("Bye!");
    Ok(())
}
