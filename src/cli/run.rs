use std::time::Duration;

use clap::Parser;

use crate::{
    cli::{self, command::{Cli, Commands}},
    domain::{
        book::AddressBook,
        contact::{Contact, PhoneEntry, PhoneNumbers, PhoneType},
    },
    errors::AppError,
    source::SampleSource,
};

pub async fn run_app() -> Result<(), AppError> {
    let args = Cli::parse();

    let source = SampleSource::with_delay(Duration::from_millis(args.fetch_delay_ms));
    let book = AddressBook::from_source(&source).await;

    match args.command {
        Commands::List { names, addresses } => {
            if book.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            if names {
                for name in book.names() {
                    println!("{}", name);
                }
                return Ok(());
            }

            if addresses {
                for address in book.addresses() {
                    println!("{}", address);
                }
                return Ok(());
            }

            if args.json {
                println!("{}", serde_json::to_string_pretty(book.contact_list())?);
                return Ok(());
            }

            print_listing(book.contact_list().iter());
            Ok(())
        }

        Commands::Find {
            name,
            address,
            phone,
            phone_type,
        } => {
            let results: Vec<&Contact> = if let Some(name) = name {
                book.find_by_name(&name)
            } else if let Some(address) = address {
                book.find_by_address(&address)
            } else if let (Some(number), Some(phone_type)) = (phone, phone_type) {
                book.find_by_phone(number, phone_type)
            } else {
                return Err(AppError::Validation(
                    "Provide --name, --address, or --phone with --phone-type".to_string(),
                ));
            };

            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            if results.is_empty() {
                println!("No matching contact");
                return Ok(());
            }

            for contact in results {
                println!();
                println!("{}", cli::display_contact(contact));
            }
            Ok(())
        }

        Commands::Add {
            name,
            address,
            home,
            office,
            studio,
        } => {
            let mut book = book;
            let mut phones = PhoneNumbers::default();

            if let Some(num) = home {
                phones.set(PhoneType::Home, PhoneEntry { num });
            }
            if let Some(num) = office {
                phones.set(PhoneType::Office, PhoneEntry { num });
            }
            if let Some(num) = studio {
                phones.set(PhoneType::Studio, PhoneEntry { num });
            }

            book.add(Contact::new(name, address, phones));
            println!("Contact added successfully");

            print_listing(book.contact_list().iter());
            Ok(())
        }
    }
}

fn print_listing<'a>(contacts: impl Iterator<Item = &'a Contact>) {
    for (mut i, contact) in contacts.enumerate() {
        i += 1;
        println!(
            "{i:>3}. {:<20} {:<25} {}",
            contact.name,
            contact.address,
            cli::display_phones(&contact.phones)
        );
    }
}
