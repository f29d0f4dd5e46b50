//! Terminal front end for the well-being core.
//!
//! # Responsibility
//! - Map one command line to one controller action and print the result.
//! - Keep all state in the local storage file under `--data-dir`.

use clap::{Parser, Subcommand};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use wellbeing_core::db::open_db;
use wellbeing_core::shell::load_profile;
use wellbeing_core::store::keys;
use wellbeing_core::{
    init_logging, AppConfig, ChallengeController, ChatController, ChatRoom, KeyValueStore,
    KvRepository, MoodController, MoodScore, OnboardingController, Screen, Shell,
    SqliteKvRepository, Tab, RESOURCES,
};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser, Debug)]
#[command(name = "wellbeing", version, about = "Local-first youth well-being check-ins")]
struct Cli {
    /// Directory holding the storage file and logs (default: ~/.wellbeing).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check core wiring.
    Ping,
    /// Show profile and stored slots.
    Status,
    /// Pick a nickname and accept the community guidelines.
    Onboard {
        nickname: String,
        #[arg(long)]
        consent: bool,
    },
    #[command(subcommand)]
    Mood(MoodCommand),
    #[command(subcommand)]
    Chat(ChatCommand),
    #[command(subcommand)]
    Challenges(ChallengeCommand),
    /// List help resources.
    Resources,
    /// Delete every stored slot on this device.
    Reset {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum MoodCommand {
    /// Record a check-in from 1 (low) to 5 (great).
    Checkin {
        #[arg(value_parser = parse_score)]
        score: MoodScore,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Show the average and history, newest first.
    History,
}

#[derive(Subcommand, Debug)]
enum ChatCommand {
    /// List rooms.
    Rooms,
    /// Select the active room.
    Switch { room: ChatRoom },
    /// Post to the active room.
    Send {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show messages in a room (default: the active one).
    Show { room: Option<ChatRoom> },
}

#[derive(Subcommand, Debug)]
enum ChallengeCommand {
    List,
    /// Mark a challenge done, or undo it.
    Toggle { id: u32 },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    if matches!(cli.command, Command::Ping) {
        println!("wellbeing_core ping={}", wellbeing_core::ping());
        println!("wellbeing_core version={}", wellbeing_core::core_version());
        return Ok(());
    }
    if matches!(cli.command, Command::Resources) {
        print_resources();
        return Ok(());
    }

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => dirs::home_dir()
            .ok_or("cannot find home directory; pass --data-dir")?
            .join(".wellbeing"),
    };
    let config = AppConfig::new(data_dir, cli.log_level.as_deref())?;
    std::fs::create_dir_all(config.data_dir())?;
    if let Err(err) = init_logging(config.log_level(), &config.log_dir()) {
        eprintln!("warning: file logging disabled: {err}");
    }

    info!(
        "event=cli_command module=cli status=start command={}",
        command_name(&cli.command)
    );

    let conn = open_db(config.db_path())?;
    let store = KeyValueStore::new(SqliteKvRepository::new(&conn));
    let mut shell = Shell::boot(&store);

    match cli.command {
        Command::Ping | Command::Resources => Ok(()),
        Command::Status => print_status(&store, &shell),
        Command::Onboard { nickname, consent } => {
            let mut onboarding = OnboardingController::new(&store);
            onboarding.set_nickname(nickname);
            onboarding.set_consent(consent);
            let session = onboarding.start()?;
            shell.complete_onboarding(session);
            println!("{}", shell.greeting());
            Ok(())
        }
        Command::Mood(command) => {
            open_tab(&mut shell, Tab::Mood)?;
            run_mood(&store, command);
            Ok(())
        }
        Command::Chat(command) => {
            open_tab(&mut shell, Tab::Chat)?;
            run_chat(&store, &shell, command);
            Ok(())
        }
        Command::Challenges(command) => {
            open_tab(&mut shell, Tab::Challenges)?;
            run_challenges(&store, command)
        }
        Command::Reset { yes } => {
            if !yes {
                return Err("reset deletes all local data; re-run with --yes".into());
            }
            for key in keys::ALL {
                store.remove(key)?;
            }
            println!("All local data removed.");
            Ok(())
        }
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Ping => "ping",
        Command::Status => "status",
        Command::Onboard { .. } => "onboard",
        Command::Mood(MoodCommand::Checkin { .. }) => "mood_checkin",
        Command::Mood(MoodCommand::History) => "mood_history",
        Command::Chat(_) => "chat",
        Command::Challenges(_) => "challenges",
        Command::Resources => "resources",
        Command::Reset { .. } => "reset",
    }
}

fn open_tab(shell: &mut Shell, tab: Tab) -> CliResult<()> {
    if shell.select_tab(tab) {
        return Ok(());
    }
    Err("finish onboarding first: wellbeing onboard <nickname> --consent".into())
}

fn run_mood<R: KvRepository>(store: &KeyValueStore<R>, command: MoodCommand) {
    let mut mood = MoodController::new(store);
    match command {
        MoodCommand::Checkin { score, note } => {
            mood.select(score);
            mood.set_note_draft(note);
            let entry = mood.save_draft();
            println!("Saved {} {}.", entry.face(), entry.mood);
            print_average(&mood);
        }
        MoodCommand::History => {
            print_average(&mood);
            if mood.entries().is_empty() {
                println!("No entries yet. Try a first check-in.");
            }
            for entry in mood.history() {
                println!(
                    "{} {}  {}  {}",
                    entry.face(),
                    entry.mood,
                    entry.date.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
                    entry.note
                );
            }
        }
    }
}

fn print_average<R: KvRepository>(mood: &MoodController<'_, R>) {
    println!(
        "Average mood: {} over {} check-ins.",
        mood.average_label(),
        mood.entries().len()
    );
}

fn run_chat<R: KvRepository>(store: &KeyValueStore<R>, shell: &Shell, command: ChatCommand) {
    let mut chat = ChatController::new(store, shell.session());
    match command {
        ChatCommand::Rooms => {
            for room in ChatRoom::ALL {
                let marker = if room == chat.current_room() { "*" } else { " " };
                println!("{marker} {:<8} {}", room.as_str(), room.label());
            }
        }
        ChatCommand::Switch { room } => {
            chat.switch_room(room);
            println!("Now in {}.", room.label());
        }
        ChatCommand::Send { text } => {
            if chat.send_message(&text.join(" ")) {
                print_room(&chat, chat.current_room());
            } else {
                println!("Nothing to send.");
            }
        }
        ChatCommand::Show { room } => {
            print_room(&chat, room.unwrap_or(chat.current_room()));
        }
    }
}

fn print_room<R: KvRepository>(chat: &ChatController<'_, R>, room: ChatRoom) {
    println!("# {}", room.label());
    for bubble in chat.render(room) {
        let indent = if bubble.is_self { "        " } else { "" };
        println!("{indent}[{}] {}", bubble.author_label, bubble.text);
    }
    println!("Safety note: this is a peer space, not therapy.");
}

fn run_challenges<R: KvRepository>(
    store: &KeyValueStore<R>,
    command: ChallengeCommand,
) -> CliResult<()> {
    let mut challenges = ChallengeController::new(store);
    if let ChallengeCommand::Toggle { id } = command {
        challenges
            .toggle(id)
            .ok_or_else(|| format!("no challenge with id {id}"))?;
    }
    for item in challenges.items() {
        let mark = if item.done { "x" } else { " " };
        println!("[{mark}] {}. {} - {}", item.id, item.title, item.desc);
    }
    println!(
        "{}/{} done.",
        challenges.completed_count(),
        challenges.items().len()
    );
    Ok(())
}

fn print_status<R: KvRepository>(store: &KeyValueStore<R>, shell: &Shell) -> CliResult<()> {
    let profile = load_profile(store);
    println!("{}", shell.greeting());
    match shell.screen() {
        Screen::Onboarding => println!("onboarding: pending"),
        Screen::Main(_) => println!("onboarding: complete"),
    }
    println!("chat room: {}", profile.current_room.label());
    println!("stored slots: {}", store.keys()?.join(", "));
    Ok(())
}

fn print_resources() {
    for resource in RESOURCES {
        println!("{}\n  {} ({})", resource.title, resource.desc, resource.link);
    }
    println!("If you are in danger, contact local emergency services immediately.");
}

fn parse_score(value: &str) -> Result<MoodScore, String> {
    let raw: u8 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number from 1 to 5"))?;
    MoodScore::new(raw).map_err(|err| err.to_string())
}
