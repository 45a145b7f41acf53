use clap::{Command, Arg, ArgMatches};

use messenger::ContactRegistry;

pub(crate) fn group_cli() -> Command {
    Command::new("group")
        .about("Manage groups")
        .subcommand(
            Command::new("add")
                .about("Create a group from existing contacts")
                .arg(Arg::new("NAME").required(true).num_args(1..).help("Group name"))
                .arg(
                    Arg::new("members")
                        .short('m')
                        .long("members")
                        .required(true)
                        .num_args(1..)
                        .help("Member contact IDs"),
                )
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a group")
                .arg(Arg::new("ID").required(true).help("Group ID"))
        )
        .subcommand(
            Command::new("avatar")
                .about("Set or clear a group avatar")
                .arg(Arg::new("ID").required(true).help("Group ID"))
                .arg(Arg::new("AVATAR").help("Avatar reference, omit to clear"))
        )
        .subcommand(
            Command::new("list")
                .about("List groups")
        )
        .help_template("{subcommands}")
}

pub(crate) fn execute(matches: &ArgMatches, registry: &mut ContactRegistry) {
    match matches.subcommand() {
        Some(("add", m)) => {
            let name = m.get_many::<String>("NAME")
                .map(|v| v.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            let members = m.get_many::<String>("members")
                .map(|v| v.cloned().collect::<Vec<_>>())
                .unwrap_or_default();

            match registry.add_group(&name, members.as_slice()) {
                Ok(group) => println!("Group created id: {}", group.id()),
                Err(e) => println!("Error: {e}"),
            }
        }
        Some(("delete", m)) => {
            let id = m.get_one::<String>("ID").map(|v| v.as_str()).unwrap_or_default();
            registry.delete_group(id);
        }
        Some(("avatar", m)) => {
            let id = m.get_one::<String>("ID").map(|v| v.as_str()).unwrap_or_default();
            let avatar = m.get_one::<String>("AVATAR").map(|v| v.as_str()).unwrap_or_default();
            match registry.set_group_avatar(id, avatar) {
                Ok(_) => println!("[OK] Group avatar updated"),
                Err(e) => println!("Error: {e}"),
            }
        }
        Some(("list", _)) => {
            println!("Groups (total:{}):", registry.groups().len());
            for group in registry.groups() {
                let names = registry.group_members(group.id())
                    .iter()
                    .map(|v| v.name().to_string())
                    .collect::<Vec<_>>();
                println!("  {}\n\t[{}]", group, names.join(", "));
            }
        }
        _ => println!("Unknown group command"),
    }
}
