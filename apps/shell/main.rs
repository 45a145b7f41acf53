use clap::{error, Parser, ArgMatches, Command};
use reedline::{Reedline, Signal};

mod prompt;
use prompt::ShellPrompt;

mod cmds {
    pub(crate) mod contact_cmd;
    pub(crate) mod group_cmd;
    pub(crate) mod session_cmd;
}

use messenger::{
    configuration as cfg,
    logger,
    open_store,
    Config,
    Contact,
    ContactRegistry,
    Group,
    KeyValueStore,
    MemoryStore,
    RegistryBuilder,
    RegistryListener,
    SessionStore,
    StoreKind,
};

#[derive(Parser, Debug)]
#[command(name = "contacts-shell")]
#[command(version = "0.1")]
#[command(about = "Interactive contacts shell", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The key-value store backend: memory, file or sqlite
    #[arg(long, value_name = "KIND")]
    store: Option<String>,

    /// The directory holding persisted data
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<String>,
}

fn build_cli() -> Command {
    let mut cmd = Command::new("contacts")
        .about("Interactive contacts shell application")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(cmds::contact_cmd::contact_cli())
        .subcommand(cmds::group_cmd::group_cli())
        .subcommand(cmds::session_cmd::login_cli())
        .subcommand(cmds::session_cmd::logout_cli())
        .subcommand(cmds::session_cmd::whoami_cli())
        .subcommand(cmds::session_cmd::profile_cli())
        .help_template("{subcommands}");

    cmd.error(error::ErrorKind::InvalidSubcommand, "Invalid command provided");
    cmd
}

fn execute_command(matches: ArgMatches, registry: &mut ContactRegistry, sessions: &mut SessionStore) {
    match matches.subcommand() {
        Some(("contact", m)) => cmds::contact_cmd::execute(m, registry),
        Some(("group", m)) => cmds::group_cmd::execute(m, registry),
        Some(("login", m)) => cmds::session_cmd::login(m, sessions),
        Some(("logout", _)) => cmds::session_cmd::logout(sessions),
        Some(("whoami", _)) => cmds::session_cmd::whoami(sessions),
        Some(("profile", m)) => cmds::session_cmd::profile(m, sessions),
        _ => println!("Unknown command"),
    }
}

// The memory backend is only useful when the registry and the session
// see the same map.
fn open_stores(cfg: &dyn Config) -> messenger::error::Result<(Box<dyn KeyValueStore>, Box<dyn KeyValueStore>)> {
    match cfg.store_kind() {
        StoreKind::Memory => {
            let store = MemoryStore::new();
            Ok((Box::new(store.clone()), Box::new(store)))
        },
        _ => Ok((open_store(cfg)?, open_store(cfg)?)),
    }
}

fn main() {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = builder.load(path) {
            eprintln!("Loading config file {} error: {e}", path);
            return;
        }
    }
    if let Some(store) = opts.store.as_ref() {
        match StoreKind::try_from(store.as_str()) {
            Ok(kind) => builder.with_store(kind),
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        };
    }
    if let Some(dir) = opts.data_dir.as_ref() {
        builder.with_data_dir(dir);
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Building configuration error: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    // Keep the console for the prompt when logging goes to a file.
    logger::setup(cfg.log_level(), cfg.log_file());
    if cfg.log_file().is_some() {
        logger::revert_console_output();
    }

    let (registry_store, session_store) = match open_stores(cfg.as_ref()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Opening {} store error: {e}", cfg.store_kind());
            return;
        }
    };

    let result = RegistryBuilder::new()
        .with_store(registry_store)
        .with_key(cfg.contacts_key())
        .with_listener(ToastListener)
        .build();

    let mut registry = match result {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating contact registry error: {e}");
            return;
        }
    };
    registry.initialize();

    let mut sessions = SessionStore::new(session_store);
    let mut cli = build_cli();
    let mut rl = Reedline::create();

    println!("Welcome to interactive contacts shell. Type 'exit' to quit.\n");
    if !sessions.is_signed_in() {
        println!("Not signed in, use 'login <NAME> --email <EMAIL>' to sign in.\n");
    }

    loop {
        let prompt = ShellPrompt::new(sessions.current().map(|v| v.name().to_string()));
        let Ok(sig) = rl.read_line(&prompt) else {
            println!("\n Fatal error occurred.");
            continue;
        };
        match sig {
            Signal::Success(line) => {
                let input = line.trim();

                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    },
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    }
                    _ => {}
                }

                let args: Vec<String> = input.split_whitespace().map(|s| s.to_string())
                    .collect();

                if args[0] == "help" {
                    _ = match cli.find_subcommand_mut(args[1].as_str()) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                let cmd = args.join(" ");
                match cli.clone().try_get_matches_from(args) {
                    Ok(matches) => execute_command(matches, &mut registry, &mut sessions),
                    Err(e) => {
                        println!("Error: invalid command: '{}'\n{}", cmd, e);
                    }
                }
            }
            Signal::CtrlC | Signal::CtrlD => {
                println!("\nGoodbye!");
                break;
            }
        }
    }

    logger::teardown();
}

struct ToastListener;
impl RegistryListener for ToastListener {
    fn on_contact_added(&self, contact: &Contact) {
        println!("[OK] Contact added successfully: {} has been added to your contacts", contact.name());
    }

    fn on_contact_updated(&self, contact: &Contact) {
        println!("[OK] Contact updated successfully: {}", contact.name());
    }

    fn on_contact_deleted(&self, contact: &Contact) {
        println!("[OK] Contact deleted: {} has been removed from your contacts", contact.name());
    }

    fn on_group_added(&self, group: &Group) {
        println!("[OK] Group created: {} with {} members", group.name(), group.size());
    }

    fn on_group_deleted(&self, group: &Group) {
        println!("[OK] Group deleted: {}", group.name());
    }
}
