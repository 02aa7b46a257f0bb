use crate::{
    cli::{
        command::{Cli, Commands},
        confirm_action, get_input_to_lower,
        render::{self, ContactCard},
    },
    logger,
    prelude::{AppError, ContactDraft, ContactManager, StorageConfig, StorageMediums},
};
use clap::Parser;
use dotenv::dotenv;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    run(cli)
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorageConfig {
        medium: StorageMediums::from(&cli.storage_choice)?,
        path: cli.storage_path,
        key: cli.storage_key,
    };

    let mut manager = ContactManager::new(config.open())?;

    match cli.command {
        Commands::Add {
            name,
            vacancy,
            phone,
        } => {
            let contact = manager.add_contact(ContactDraft { name, vacancy, phone })?;

            println!("Contact added successfully");
            println!("{}", ContactCard::from(&contact).render());
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            id,
            name,
            vacancy,
            phone,
        } => {
            let Some(current) = manager.get(&id).map(|c| c.draft()) else {
                return Err(AppError::NotFound("Contact".to_string()));
            };

            // Fields not given on the command line keep their current value
            let draft = ContactDraft {
                name: name.unwrap_or(current.name),
                vacancy: vacancy.unwrap_or(current.vacancy),
                phone: phone.unwrap_or(current.phone),
            };

            let contact = manager.update_contact(&id, draft)?;

            println!("Contact updated successfully");
            println!("{}", ContactCard::from(&contact).render());
            Ok(())
        }

        // Delete Contact
        Commands::Delete { id } => {
            match manager.delete_contact(&id)? {
                Some(_) => println!("Contact deleted successfully"),
                None => eprintln!("{}", AppError::NotFound("Contact".to_string())),
            }
            Ok(())
        }

        Commands::Clear { yes } => {
            if !yes {
                confirm_action("delete all contacts")?;

                let consent = get_input_to_lower()?;
                if consent != "y" {
                    println!("Nothing deleted");
                    return Ok(());
                }
            }

            manager.clear()?;
            println!("All contacts deleted");
            Ok(())
        }

        Commands::Letters => {
            for line in render::render_groups(&manager.group_counts()) {
                println!("{line}");
            }
            Ok(())
        }

        Commands::Show { letter } => {
            for line in render::render_selection(&manager.contacts_by_letter(letter)) {
                println!("{line}");
            }
            Ok(())
        }

        // Search for a contact
        Commands::Search { query } => {
            for line in render::render_search(&manager.search(&query)) {
                println!("{line}");
            }
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            if manager.contact_list().is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (mut i, c) in manager.contact_list().iter().enumerate() {
                i += 1;
                println!("{i:>3}. {}", ContactCard::from(c).render());
            }
            Ok(())
        }
    }
}
