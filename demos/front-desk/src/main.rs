use innkeep_desk::prelude::*;
use innkeep_desk::view::{price_label, render_table};
use innkeep_desk::{load_inventory, SELECT_PLACEHOLDER};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

const HELP: &str = "\
commands:
  rooms            availability of every room
  options          rooms that can be booked
  price <n>        nightly rate of room n
  book             fill in a booking form
  checkout <n>     check out room n
  export           print all rooms as JSON
  help             show this text
  quit             leave";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Rooms,
    Options,
    Price(RoomNumber),
    Book,
    CheckOut(RoomNumber),
    Export,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
    let arg = parts.next();
    let room = || {
        arg.and_then(|n| n.parse::<u32>().ok())
            .map(RoomNumber)
            .ok_or_else(|| format!("usage: {verb} <room number>"))
    };
    match verb.as_str() {
        "rooms" | "list" => Ok(Command::Rooms),
        "options" => Ok(Command::Options),
        "price" => room().map(Command::Price),
        "book" | "reserve" => Ok(Command::Book),
        "checkout" => room().map(Command::CheckOut),
        "export" => Ok(Command::Export),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(String::new()),
        other => Err(format!("unknown command '{other}', try 'help'")),
    }
}

// ---------------------------------------------------------------------------
// Terminal I/O
// ---------------------------------------------------------------------------

type Input = Lines<BufReader<Stdin>>;

async fn prompt(input: &mut Input, label: &str) -> std::io::Result<Option<String>> {
    let mut out = tokio::io::stdout();
    out.write_all(label.as_bytes()).await?;
    out.flush().await?;
    input.next_line().await
}

/// Walks the guest through the form. `None` if input ended mid-form.
async fn read_form(desk: &FrontDesk, input: &mut Input) -> std::io::Result<Option<BookingForm>> {
    let options = desk.options().await;
    if options.is_empty() {
        println!("No rooms available");
        return Ok(None);
    }
    println!("0) {SELECT_PLACEHOLDER}");
    for (i, label) in options.iter().enumerate() {
        println!("{}) {label}", i + 1);
    }

    let Some(choice) = prompt(input, "Room: ").await? else {
        return Ok(None);
    };
    let room = match choice.trim().parse::<usize>() {
        Ok(i) if (1..=options.len()).contains(&i) => options[i - 1].clone(),
        Ok(_) => SELECT_PLACEHOLDER.to_string(),
        Err(_) => choice,
    };

    let mut fields = Vec::with_capacity(5);
    for label in [
        "Name: ",
        "Contact Number (11 Digits Only): ",
        "Check-in Date (yyyy-MM-dd): ",
        "Duration of Stay (days): ",
        "Number of Guests: ",
    ] {
        match prompt(input, label).await? {
            Some(value) => fields.push(value),
            None => return Ok(None),
        }
    }
    let [customer_name, contact_number, check_in, duration, guests]: [String; 5] =
        match fields.try_into() {
            Ok(f) => f,
            Err(_) => return Ok(None),
        };

    Ok(Some(BookingForm {
        room,
        customer_name,
        contact_number,
        check_in,
        duration,
        guests,
    }))
}

// ---------------------------------------------------------------------------
// Main loop
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let desk = match std::env::args().nth(1) {
        Some(path) => FrontDesk::from_config(&load_inventory(path)?)?,
        None => FrontDesk::new(),
    };

    println!("Innkeep front desk. Type 'help' for commands.");
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = prompt(&mut input, "> ").await? {
        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(msg) => {
                if !msg.is_empty() {
                    println!("{msg}");
                }
                continue;
            }
        };

        match command {
            Command::Rooms => println!("{}", render_table(&desk.availability().await)),
            Command::Options => {
                let options = desk.options().await;
                if options.is_empty() {
                    println!("No rooms available");
                }
                for label in options {
                    println!("{label}");
                }
            }
            Command::Price(number) => {
                let label = desk
                    .with_rooms(|rooms| rooms.room(number).map(price_label))
                    .await;
                match label {
                    Some(label) => println!("{label}"),
                    None => println!("{}", RoomError::NotFound(number)),
                }
            }
            Command::Book => {
                let Some(form) = read_form(&desk, &mut input).await? else {
                    continue;
                };
                match desk.book(&form).await {
                    Ok(confirmation) => println!("{}", confirmation.message),
                    Err(e) => println!("{}", e.user_message()),
                }
            }
            Command::CheckOut(number) => match desk.check_out(number).await {
                Ok(r) => println!("Room {number} checked out ({}).", r.customer_name),
                Err(e) => println!("{}", e.user_message()),
            },
            Command::Export => println!("{}", desk.snapshot().await.to_json()?),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("rooms"), Ok(Command::Rooms));
        assert_eq!(parse_command("  LIST "), Ok(Command::Rooms));
        assert_eq!(parse_command("book"), Ok(Command::Book));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_room_argument() {
        assert_eq!(parse_command("checkout 4"), Ok(Command::CheckOut(RoomNumber(4))));
        assert_eq!(parse_command("price 10"), Ok(Command::Price(RoomNumber(10))));
        assert!(parse_command("checkout").unwrap_err().contains("usage"));
        assert!(parse_command("price four").is_err());
    }

    #[test]
    fn test_parse_unknown_and_blank() {
        assert!(parse_command("dance").unwrap_err().contains("unknown command"));
        assert_eq!(parse_command("   "), Err(String::new()));
    }
}
