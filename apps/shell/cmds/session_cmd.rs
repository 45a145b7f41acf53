use clap::{Command, Arg, ArgMatches};

use messenger::{
    SessionStore,
    UserSession,
};

pub(crate) fn login_cli() -> Command {
    Command::new("login")
        .about("Sign in as a local user")
        .arg(Arg::new("NAME").required(true).num_args(1..).help("User name"))
        .arg(Arg::new("email").long("email").required(true).help("Email address"))
}

pub(crate) fn logout_cli() -> Command {
    Command::new("logout")
        .about("Sign out the local user")
}

pub(crate) fn whoami_cli() -> Command {
    Command::new("whoami")
        .about("Show the signed in user")
}

pub(crate) fn profile_cli() -> Command {
    Command::new("profile")
        .about("Edit the signed in user's profile")
        .arg(Arg::new("name").long("name").num_args(1..).help("User name"))
        .arg(Arg::new("email").long("email").help("Email address"))
        .arg(Arg::new("phone").long("phone").help("Phone number"))
        .arg(Arg::new("avatar").long("avatar").help("Avatar reference"))
        .arg(Arg::new("bio").long("bio").num_args(1..).help("Short bio"))
}

pub(crate) fn login(m: &ArgMatches, sessions: &mut SessionStore) {
    let name = m.get_many::<String>("NAME")
        .map(|v| v.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    let email = m.get_one::<String>("email").map(|v| v.as_str()).unwrap_or_default();

    match sessions.sign_in(&UserSession::new("1", &name, email)) {
        Ok(_) => println!("[OK] Signed in as {}", name),
        Err(e) => println!("Error: {e}"),
    }
}

pub(crate) fn profile(m: &ArgMatches, sessions: &mut SessionStore) {
    let Some(mut user) = sessions.current() else {
        println!("Not signed in");
        return;
    };

    if let Some(name) = m.get_many::<String>("name") {
        user.set_name(&name.cloned().collect::<Vec<_>>().join(" "));
    }
    if let Some(email) = m.get_one::<String>("email") {
        user.set_email(email);
    }
    if let Some(phone) = m.get_one::<String>("phone") {
        user.set_phone(phone);
    }
    if let Some(avatar) = m.get_one::<String>("avatar") {
        user.set_avatar(avatar);
    }
    if let Some(bio) = m.get_many::<String>("bio") {
        user.set_bio(&bio.cloned().collect::<Vec<_>>().join(" "));
    }

    match sessions.update(&user) {
        Ok(_) => println!("[OK] Profile updated: Your profile has been updated successfully"),
        Err(e) => println!("Error: {e}"),
    }
}

pub(crate) fn logout(sessions: &mut SessionStore) {
    match sessions.sign_out() {
        Ok(_) => println!("[OK] Signed out"),
        Err(e) => println!("Error: {e}"),
    }
}

pub(crate) fn whoami(sessions: &SessionStore) {
    match sessions.current() {
        Some(user) => {
            println!(" userid:\t{}", user.id());
            println!(" name:\t\t{}", user.name());
            println!(" email:\t\t{}", user.email());
            println!(" phone:\t\t{}", user.phone().unwrap_or("-"));
            println!(" bio:\t\t{}", user.bio().unwrap_or("-"));
            println!(" avatar:\t{}", user.avatar());
        }
        None => println!("Not signed in"),
    }
}
