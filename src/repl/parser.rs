//! Parsing of input lines into commands.
//!
//! A line is lowercased and split on whitespace. The first token names the
//! command and the remaining tokens are its arguments, so names are
//! case-insensitive too. A known command with the wrong number of arguments
//! is treated as invalid.

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    Delete { name: String },
    EditPhone { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
    Invalid,
}

/// Split a lowercased line into its command token and arguments.
///
/// Returns `None` for a blank line.
pub fn split_input(line: &str) -> Option<(String, Vec<String>)> {
    let line = line.to_lowercase();
    let mut tokens = line.split_whitespace().map(str::to_string);
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}

/// Parse one input line.
pub fn parse_input(line: &str) -> Command {
    let Some((command, args)) = split_input(line) else {
        return Command::Invalid;
    };

    match (command.as_str(), args.as_slice()) {
        ("close" | "exit", _) => Command::Exit,
        ("hello", []) => Command::Hello,
        ("add", [name, phone]) => Command::Add {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ("change", [name, phone]) => Command::Change {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ("phone", [name]) => Command::Phone {
            name: name.to_string(),
        },
        ("all", []) => Command::All,
        ("delete", [name]) => Command::Delete {
            name: name.to_string(),
        },
        ("edit-phone", [name, old, new]) => Command::EditPhone {
            name: name.to_string(),
            old: old.to_string(),
            new: new.to_string(),
        },
        ("remove-phone", [name, phone]) => Command::RemovePhone {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ("add-birthday", [name, date]) => Command::AddBirthday {
            name: name.to_string(),
            date: date.to_string(),
        },
        ("show-birthday", [name]) => Command::ShowBirthday {
            name: name.to_string(),
        },
        ("birthdays", []) => Command::Birthdays,
        _ => Command::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_input() {
        let (command, args) = split_input("  ADD  Alice 0501234567 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["alice", "0501234567"]);
        assert!(split_input("   ").is_none());
    }

    #[test]
    fn test_parse_lowercases_arguments() {
        assert_eq!(
            parse_input("Add Alice 0501234567"),
            Command::Add {
                name: "alice".to_string(),
                phone: "0501234567".to_string(),
            }
        );
        assert_eq!(parse_input("PHONE ALICE"), parse_input("phone alice"));
    }

    #[test]
    fn test_parse_wrong_arity_is_invalid() {
        assert_eq!(parse_input("add Alice"), Command::Invalid);
        assert_eq!(parse_input("phone"), Command::Invalid);
        assert_eq!(parse_input("all now"), Command::Invalid);
        assert_eq!(parse_input("hello there"), Command::Invalid);
        assert_eq!(parse_input("edit-phone Alice 0501234567"), Command::Invalid);
    }

    #[test]
    fn test_parse_exit_ignores_arguments() {
        assert_eq!(parse_input("close"), Command::Exit);
        assert_eq!(parse_input("EXIT now"), Command::Exit);
    }

    #[test]
    fn test_parse_birthday_commands() {
        assert_eq!(
            parse_input("add-birthday bob 1990-05-17"),
            Command::AddBirthday {
                name: "bob".to_string(),
                date: "1990-05-17".to_string(),
            }
        );
        assert_eq!(
            parse_input("show-birthday bob"),
            Command::ShowBirthday {
                name: "bob".to_string()
            }
        );
        assert_eq!(parse_input("birthdays"), Command::Birthdays);
    }

    #[test]
    fn test_parse_unknown_and_blank() {
        assert_eq!(parse_input("dance"), Command::Invalid);
        assert_eq!(parse_input(""), Command::Invalid);
    }
}
