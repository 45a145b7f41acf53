use clap::{Command, Arg, ArgAction, ArgMatches};

use messenger::{
    search,
    ContactBuilder,
    ContactRegistry,
    ContactStatus,
};

pub(crate) fn contact_cli() -> Command {
    Command::new("contact")
        .about("Manage contacts")
        .subcommand(
            Command::new("add")
                .about("Add a contact")
                .arg(Arg::new("NAME").required(true).num_args(1..).help("Display name"))
                .arg(Arg::new("phone").long("phone").help("Phone number"))
                .arg(Arg::new("email").long("email").help("Email address"))
                .arg(Arg::new("avatar").long("avatar").help("Avatar reference"))
        )
        .subcommand(
            Command::new("update")
                .about("Replace a contact's fields")
                .arg(Arg::new("ID").required(true).help("Contact ID"))
                .arg(Arg::new("name").long("name").num_args(1..).help("Display name"))
                .arg(Arg::new("phone").long("phone").help("Phone number, empty to clear"))
                .arg(Arg::new("email").long("email").help("Email address, empty to clear"))
                .arg(Arg::new("avatar").long("avatar").help("Avatar reference"))
                .arg(Arg::new("status").long("status").value_parser(["online", "offline"]).help("Presence status"))
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a contact")
                .arg(Arg::new("ID").required(true).help("Contact ID"))
        )
        .subcommand(
            Command::new("show")
                .about("Show a contact")
                .arg(Arg::new("ID").required(true).help("Contact ID"))
        )
        .subcommand(
            Command::new("list")
                .about("List contacts")
                .arg(
                    Arg::new("online")
                        .long("online")
                        .help("List online contacts only")
                        .action(ArgAction::SetTrue),
                )
        )
        .subcommand(
            Command::new("search")
                .about("Search contacts by name")
                .arg(Arg::new("TERM").required(true).num_args(1..).help("Search term"))
        )
        .help_template("{subcommands}")
}

fn joined(m: &ArgMatches, id: &str) -> Option<String> {
    m.get_many::<String>(id).map(|v| v.cloned().collect::<Vec<_>>().join(" "))
}

pub(crate) fn execute(matches: &ArgMatches, registry: &mut ContactRegistry) {
    match matches.subcommand() {
        Some(("add", m)) => {
            let mut builder = ContactBuilder::new();
            builder.with_name(&joined(m, "NAME").unwrap_or_default());
            if let Some(phone) = m.get_one::<String>("phone") {
                builder.with_phone(phone);
            }
            if let Some(email) = m.get_one::<String>("email") {
                builder.with_email(email);
            }
            if let Some(avatar) = m.get_one::<String>("avatar") {
                builder.with_avatar(avatar);
            }

            match registry.add_contact(&mut builder) {
                Ok(contact) => println!("Contact created id: {}", contact.id()),
                Err(e) => println!("Error: {e}"),
            }
        }
        Some(("update", m)) => {
            let id = m.get_one::<String>("ID").map(|v| v.as_str()).unwrap_or_default();
            let Some(mut contact) = registry.contact(id).cloned() else {
                println!("No contact found with id: {}", id);
                return;
            };

            if let Some(name) = joined(m, "name") {
                contact.set_name(&name);
            }
            if let Some(phone) = m.get_one::<String>("phone") {
                contact.set_phone(phone);
            }
            if let Some(email) = m.get_one::<String>("email") {
                contact.set_email(email);
            }
            if let Some(avatar) = m.get_one::<String>("avatar") {
                contact.set_avatar(avatar);
            }
            match m.get_one::<String>("status").map(|v| v.as_str()) {
                Some("online") => contact.set_status(ContactStatus::Online),
                Some("offline") => contact.set_status(ContactStatus::Offline),
                _ => {}
            }

            if let Err(e) = registry.update_contact(contact) {
                println!("Error: {e}");
            }
        }
        Some(("delete", m)) => {
            let id = m.get_one::<String>("ID").map(|v| v.as_str()).unwrap_or_default();
            registry.delete_contact(id);
        }
        Some(("show", m)) => {
            let id = m.get_one::<String>("ID").map(|v| v.as_str()).unwrap_or_default();
            match registry.contact(id) {
                Some(contact) => {
                    println!("Contact id({})\n\tname({})\n\tphone({})\n\temail({})\n\tavatar({})\n\tstatus({})",
                        contact.id(),
                        contact.name(),
                        contact.phone().unwrap_or("-"),
                        contact.email().unwrap_or("-"),
                        contact.avatar(),
                        contact.status()
                    );
                }
                None => println!("No contact found with id: {}", id),
            }
        }
        Some(("list", m)) => {
            let contacts = match m.get_flag("online") {
                true => search::online_only(registry.contacts()),
                false => registry.contacts().iter().collect(),
            };
            println!("Contacts (total:{}):", contacts.len());
            for contact in contacts {
                println!("  {}", contact);
            }
        }
        Some(("search", m)) => {
            let term = joined(m, "TERM").unwrap_or_default();
            let found = search::search(registry.contacts(), &term);
            if found.is_empty() {
                println!("No contacts found");
                return;
            }
            for contact in found {
                println!("  {}", contact);
            }
        }
        _ => println!("Unknown contact command"),
    }
}
