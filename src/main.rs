use std::{
    io::{self, Write},
    ptr,
    rc::Rc,
};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use library_notify::{
    AvailabilityLogger, Book, LibraryError, LibraryManager, User, UserFactory,
};

/// Scenarios the demo can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    /// Single subscriber, book becomes available
    S1,
    /// Book toggled unavailable after S1
    S2,
    /// Same member subscribed twice
    S3,
    /// Two subscribers notified in order
    S4,
    /// Users built from role tags
    S5,
    /// Library manager handle identity
    S6,
    /// Every scenario in turn
    All,
}

/// Command-line arguments for the library notification demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which scenario to run
    #[arg(short, long, value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,

    /// Attach an availability logger to every book and log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), LibraryError> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    println!("{}", "Library Notification Demonstration".green().bold());
    println!("==================================\n");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let demo = Demo { verbose: args.verbose };

    let scenarios = if args.scenario == Scenario::All {
        vec![Scenario::S1, Scenario::S2, Scenario::S3, Scenario::S4, Scenario::S5, Scenario::S6]
    } else {
        vec![args.scenario]
    };

    for scenario in scenarios {
        demo.run(scenario, &mut out)?;
    }

    println!("\n{}", "Demonstration complete!".green().bold());
    Ok(())
}

/// Runs scenarios against a sink
#[derive(Debug)]
struct Demo {
    /// Whether to attach an `AvailabilityLogger` to each book
    verbose: bool,
}

impl Demo {
    /// Create a book, with a logger attached when verbose
    fn book(&self, title: &str, author: &str) -> Book {
        let mut book = Book::new(title, author);
        if self.verbose {
            book.add_observer(Rc::new(AvailabilityLogger));
        }
        book
    }

    /// Run one scenario, printing a coloured header first
    fn run(&self, scenario: Scenario, out: &mut dyn Write) -> Result<(), LibraryError> {
        println!("{}", format!("\n--- Scenario {scenario:?} ---").yellow().bold());
        match scenario {
            Scenario::S1 => {
                self.single_subscriber(out)?;
            }
            Scenario::S2 => {
                let mut book = self.single_subscriber(out)?;
                println!("{}", "Setting Dune unavailable (no output expected)".blue());
                book.set_available(false, out)?;
            }
            Scenario::S3 => {
                let mut book = self.book("X", "Y");
                let bob = Rc::new(User::member("Bob", "m2"));
                book.add_observer(bob.clone());
                book.add_observer(bob);
                book.set_available(true, out)?;
            }
            Scenario::S4 => {
                let mut book = self.book("Dune", "Herbert");
                book.add_observer(Rc::new(User::member("Alice", "m1")));
                book.add_observer(Rc::new(User::member("Bob", "m2")));
                book.set_available(true, out)?;
            }
            Scenario::S5 => {
                match UserFactory::create_user("librarian", "Carol", "l1") {
                    Some(carol) => {
                        print!("{} is a ", carol.name());
                        carol.show_role(out)?;
                    }
                    None => println!("Factory did not recognise \"librarian\""),
                }
                if UserFactory::create_user("ghost", "Casper", "g1").is_none() {
                    println!("Factory returned nothing for \"ghost\"");
                }
            }
            Scenario::S6 => {
                let first = LibraryManager::get_instance();
                let second = LibraryManager::get_instance();
                println!("Same library manager: {}", ptr::eq(first, second));
            }
            Scenario::All => {}
        }
        Ok(())
    }

    /// Alice subscribes to Dune, which is then set available
    fn single_subscriber(&self, out: &mut dyn Write) -> Result<Book, LibraryError> {
        let mut book = self.book("Dune", "Herbert");
        book.add_observer(Rc::new(User::member("Alice", "m1")));
        book.set_available(true, out)?;
        Ok(book)
    }
}
