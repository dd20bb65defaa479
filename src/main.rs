extern crate readthrough;

extern crate ansi_term;
extern crate chrono;
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

use std::path::PathBuf;

use ansi_term::{Colour, Style};
use chrono::{Days, NaiveDate};
use clap::{App, AppSettings, Arg, ArgGroup, ArgMatches, SubCommand};

use readthrough::calendar::{format_date_input, parse_date_input};
use readthrough::errors::*;
use readthrough::files::{self, FileStore};
use readthrough::{split_passage, Clock, Plan, PlanProvider, ProgressStore};

type Store = ProgressStore<FileStore>;

/// Describes all the styles that can be used in printing text.
/// Mostly just good for disabling custom formatting.
#[derive(Debug, Clone)]
struct StyleSet {
    /// Normal text
    normal: Style,
    /// Book names and headings
    title: Style,
    /// Passages already read
    done: Style,
    /// Secondary notes
    description: Style,
    /// Error text
    error: Style,
}

impl StyleSet {
    /// Preset for the --no-ansi option (no style)
    fn no_ansi() -> StyleSet {
        StyleSet {
            normal: Style::new(),
            title: Style::new(),
            done: Style::new(),
            description: Style::new(),
            error: Style::new(),
        }
    }

    /// Preset for the normal "fancy" style
    fn fancy() -> StyleSet {
        StyleSet {
            normal: Style::new(),
            title: Colour::White.bold(),
            done: Colour::Green.normal(),
            description: Style::new().italic(),
            error: Colour::Red.normal(),
        }
    }
}

/// Returns styled text (using a format string syntax)
macro_rules! style {
    ($style:expr, $($arg:tt)*) => {
        {{
            $style.paint(format!( $($arg)*) )
        }}
    }
}

/// Prints a line of text in the given style
macro_rules! styleln {
    ($style:expr, $($arg:tt)*) => {
        println!("{}", style!($style, $($arg)*))
    }
}

pub fn main() {
    env_logger::init();

    let matches = App::new("readthrough")
        .version("0.1.0")
        .author("Ian Johnson <ianprime0509@gmail.com>")
        .about("Keeps your place in a one-year Bible reading plan")
        .setting(AppSettings::ColoredHelp)
        .arg(Arg::with_name("no-ansi")
            .help("Disables fancy text output")
            .short("n")
            .long("no-ansi"))
        .arg(Arg::with_name("store")
            .help("The file that progress is saved to")
            .short("s")
            .long("store")
            .value_name("PATH")
            .env("READTHROUGH_STORE")
            .takes_value(true))
        .subcommand(SubCommand::with_name("today").about("Shows today's reading"))
        .subcommand(SubCommand::with_name("view")
            .about("Shows the reading for another day")
            .arg(Arg::with_name("day")
                .short("d")
                .long("day")
                .value_name("DAY")
                .help("The day of the plan to show (starting at 1)")
                .takes_value(true))
            .arg(Arg::with_name("date")
                .long("date")
                .value_name("DATE")
                .help("The calendar date to show (YYYY-MM-DD)")
                .takes_value(true))
            .arg(Arg::with_name("offset")
                .short("o")
                .long("offset")
                .value_name("DAYS")
                .help("The number of days after (or before, if negative) today to show")
                .allow_hyphen_values(true)
                .takes_value(true))
            .group(ArgGroup::with_name("which").args(&["day", "date", "offset"])))
        .subcommand(SubCommand::with_name("read")
            .about("Marks a passage as read, or as unread if it already was")
            .arg(Arg::with_name("POSITION")
                .help("The number of the passage within the day (starting at 1)")
                .required(true))
            .arg(Arg::with_name("day")
                .short("d")
                .long("day")
                .value_name("DAY")
                .help("The day of the plan the passage belongs to (default: today)")
                .takes_value(true)))
        .subcommand(SubCommand::with_name("start")
            .about("Changes the date the plan started on")
            .arg(Arg::with_name("DATE")
                .help("The new start date (YYYY-MM-DD)")
                .required(true))
            .arg(Arg::with_name("import")
                .short("i")
                .long("import")
                .help("Also mark every day before today as read"))
            .after_help("With --import, all existing progress is replaced: everything from the \
                         start date up to yesterday is marked as read and everything else as \
                         unread. Without it, read passages are left alone."))
        .subcommand(SubCommand::with_name("pace")
            .about("Chooses how today's reading is decided")
            .arg(Arg::with_name("MODE")
                .help("'calendar' follows the date; 'self' continues from the first unfinished day")
                .possible_values(&["calendar", "self"])
                .required(true)))
        .subcommand(SubCommand::with_name("status").about("Summarizes progress through the plan"))
        .subcommand(SubCommand::with_name("reset").about("Forgets all progress and starts the plan today"))
        .after_help("readthrough keeps track of a 365-day plan that reads through the whole \
                     Bible. Run `readthrough` on its own to see today's reading, and \
                     `readthrough read 1` to check off the first passage.")
        .get_matches();

    // Whether we should disable the fancy ANSI terminal text
    let no_ansi = matches.is_present("no-ansi");
    // The style to use
    let style_set = if no_ansi {
        StyleSet::no_ansi()
    } else {
        StyleSet::fancy()
    };

    // Handle errors nicely
    if let Err(ref e) = run(&matches, &style_set) {
        styleln!(style_set.error, "Error: {}", e);

        for e in e.iter().skip(1) {
            styleln!(style_set.error, "Caused by: {}", e);
        }

        if let Some(backtrace) = e.backtrace() {
            styleln!(style_set.error, "Backtrace: {:?}", backtrace);
        }

        std::process::exit(1);
    }
}

/// The main program logic.
/// Each subcommand should do its own printing, except for errors, which are returned.
fn run(m: &ArgMatches, style_set: &StyleSet) -> Result<()> {
    let storage = open_store(m)?;
    let mut provider = PlanProvider::new();
    provider.hydrate(Plan::bundled(), storage, Clock::System);
    let store = provider.store_mut()?;

    if !store.is_onboarded() {
        welcome(store, style_set);
    }

    // Run the appropriate subcommand
    match m.subcommand() {
        ("today", Some(_)) => today(store, style_set),
        ("view", Some(sub_m)) => view(sub_m, store, style_set),
        ("read", Some(sub_m)) => read(sub_m, store, style_set),
        ("start", Some(sub_m)) => start(sub_m, store, style_set),
        ("pace", Some(sub_m)) => pace(sub_m, store, style_set),
        ("status", Some(_)) => status(store, style_set),
        ("reset", Some(_)) => reset(store, style_set),
        _ => today(store, style_set),
    }
}

/// Opens the store named on the command line, or the default one.
/// An unreadable store is replaced by an empty one rather than stopping
/// the program.
fn open_store(m: &ArgMatches) -> Result<FileStore> {
    let path = match m.value_of("store") {
        Some(p) => PathBuf::from(p),
        None => files::default_store_path().chain_err(|| "could not locate the progress store")?,
    };

    Ok(FileStore::open(&path).unwrap_or_else(|e| {
        warn!("starting with empty progress: {}", e);
        FileStore::empty(&path)
    }))
}

/// Printed the first time the program runs.
fn welcome(store: &mut Store, style_set: &StyleSet) {
    styleln!(style_set.title, "Welcome to readthrough!");
    styleln!(style_set.description,
             "Your plan starts today, {}. Use `readthrough start` to pick another date, or \
              `readthrough pace self` to read at your own pace.",
             format_date_input(store.start_date()));
    println!();
    store.set_onboarded(true);
}

/// Returns the calendar date that the day at `index` falls on.
fn date_for_index(store: &Store, index: usize) -> Option<NaiveDate> {
    store.start_date().checked_add_days(Days::new(index as u64))
}

/// Parses a 1-based day number into an index into the selections.
fn parse_day(s: &str, store: &Store) -> Result<usize> {
    let day: usize = s.parse().chain_err(|| format!("invalid day number '{}'", s))?;
    if day == 0 || day > store.cycle_length() {
        return Err(ErrorKind::DayOutOfRange(day, store.cycle_length()).into());
    }
    Ok(day - 1)
}

/// Prints the reading for the day at `index`, with read marks.
fn print_day(store: &Store, index: usize, style_set: &StyleSet) {
    let sel = match store.get_selection(Some(index)) {
        Some(sel) => sel,
        None => return,
    };
    let date = date_for_index(store, index).map(format_date_input).unwrap_or_default();
    let mut heading = format!("Day {} of {}", index + 1, store.cycle_length());
    if !store.is_self_paced() {
        heading += &format!(" ({})", date);
    }
    if index == store.index_for_today() {
        heading += " - today";
    }
    styleln!(style_set.title, "{}", heading);

    if sel.is_leap() {
        styleln!(style_set.description, "    February 29: nothing to read today");
        return;
    }
    for (pos, text) in sel.passages().iter().enumerate() {
        let passage = split_passage(text);
        let (mark, style) = if store.has_read(text, pos) {
            ("[x]", &style_set.done)
        } else {
            ("[ ]", &style_set.normal)
        };
        println!("  {} {} {} {}",
                 style!(style_set.description, "{}.", pos + 1),
                 style!(style, "{}", mark),
                 style!(style_set.title, "{}", passage.book),
                 style!(style_set.normal, "{}", passage.chapter));
    }
}

/// The `today` subcommand logic
fn today(store: &mut Store, style_set: &StyleSet) -> Result<()> {
    print_day(store, store.selected_index(), style_set);
    Ok(())
}

/// The `view` subcommand logic
fn view(m: &ArgMatches, store: &mut Store, style_set: &StyleSet) -> Result<()> {
    if let Some(d) = m.value_of("day") {
        let index = parse_day(d, store)?;
        store.set_selected_index(index);
    } else if let Some(d) = m.value_of("date") {
        let date = parse_date_input(d)?;
        let index = store.index_for_date(date);
        store.set_selected_index(index);
    } else if let Some(o) = m.value_of("offset") {
        let offset: i64 = o.parse().chain_err(|| "invalid numeric argument to `--offset`")?;
        store.next_day(offset);
    }

    print_day(store, store.selected_index(), style_set);
    Ok(())
}

/// The `read` subcommand logic
fn read(m: &ArgMatches, store: &mut Store, style_set: &StyleSet) -> Result<()> {
    let index = match m.value_of("day") {
        Some(d) => parse_day(d, store)?,
        None => store.selected_index(),
    };
    // We can unwrap this because the argument is required
    let position: usize = m.value_of("POSITION")
        .unwrap()
        .parse()
        .chain_err(|| "invalid passage number")?;

    let text = {
        let sel = store.get_selection(Some(index)).ok_or(ErrorKind::DayOutOfRange(index + 1, store.cycle_length()))?;
        if sel.is_leap() {
            bail!("day {} is February 29, which has no passages", index + 1);
        }
        if position == 0 || position > sel.passages().len() {
            bail!("day {} has {} passages; there is no passage {}",
                  index + 1,
                  sel.passages().len(),
                  position);
        }
        sel.passages()[position - 1].clone()
    };

    let now_read = store.toggle_read(&text, position - 1);
    styleln!(style_set.normal,
             "Marked {} as {}",
             text,
             if now_read { "read" } else { "unread" });
    if now_read && store.is_day_complete(index) {
        styleln!(style_set.done, "Day {} is complete!", index + 1);
    }
    Ok(())
}

/// The `start` subcommand logic
fn start(m: &ArgMatches, store: &mut Store, style_set: &StyleSet) -> Result<()> {
    // We can unwrap this because the argument is required
    let date = parse_date_input(m.value_of("DATE").unwrap())?;

    if m.is_present("import") {
        store.change_start_date(date);
        styleln!(style_set.normal,
                 "Plan restarted on {}; {} passages marked as read",
                 format_date_input(date),
                 store.read_state().len());
    } else {
        store.set_start_date(date);
        styleln!(style_set.normal, "Plan start date changed to {}", format_date_input(date));
    }
    styleln!(style_set.description,
             "Today is day {} of {}",
             store.index_for_today() + 1,
             store.cycle_length());
    Ok(())
}

/// The `pace` subcommand logic
fn pace(m: &ArgMatches, store: &mut Store, style_set: &StyleSet) -> Result<()> {
    let self_paced = m.value_of("MODE") == Some("self");
    store.set_self_paced(self_paced);

    if self_paced {
        styleln!(style_set.normal,
                 "Reading at your own pace; today is the first unfinished day (day {})",
                 store.index_for_today() + 1);
    } else {
        styleln!(style_set.normal,
                 "Following the calendar; today is day {}",
                 store.index_for_today() + 1);
    }
    Ok(())
}

/// The `status` subcommand logic
fn status(store: &mut Store, style_set: &StyleSet) -> Result<()> {
    let regular_days = store.selections().iter().filter(|s| !s.is_leap()).count();

    println!("{} {}",
             style!(style_set.normal, "{:20}", "Start date:"),
             style!(style_set.title, "{}", format_date_input(store.start_date())));
    println!("{} {}",
             style!(style_set.normal, "{:20}", "Pace:"),
             style!(style_set.title,
                    "{}",
                    if store.is_self_paced() { "self-paced" } else { "calendar" }));
    println!("{} {}",
             style!(style_set.normal, "{:20}", "Today:"),
             style!(style_set.title, "day {} of {}", store.index_for_today() + 1, store.cycle_length()));
    println!("{} {}",
             style!(style_set.normal, "{:20}", "Completed:"),
             style!(style_set.title, "{} of {} days", store.completed_days(), regular_days));
    styleln!(style_set.description,
             "{:20} {}",
             "",
             store.storage().path().display());
    Ok(())
}

/// The `reset` subcommand logic
fn reset(store: &mut Store, style_set: &StyleSet) -> Result<()> {
    store.reset_all();
    styleln!(style_set.normal,
             "Progress cleared; the plan starts over today ({})",
             format_date_input(store.start_date()));
    Ok(())
}
