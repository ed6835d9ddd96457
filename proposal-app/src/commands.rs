use crate::error::CommandError;
use proposal_catalog::{AddonId, PackageId};
use proposal_session::{FocusTarget, HoverTarget};
use std::str::FromStr;

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Package { id: PackageId, checked: bool },
    Addon { id: AddonId, checked: bool },
    Cta,
    Hover(HoverTarget),
    Leave(HoverTarget),
    Key { key: String, focus: FocusTarget },
    Goto(String),
    Show,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;

        let command = match verb {
            "package" => Command::Package {
                id: next(&mut words, "package id")?.parse()?,
                checked: parse_switch(next(&mut words, "on|off")?)?,
            },
            "addon" => Command::Addon {
                id: AddonId::from(next(&mut words, "add-on id")?),
                checked: parse_switch(next(&mut words, "on|off")?)?,
            },
            "cta" => Command::Cta,
            "hover" => Command::Hover(parse_hover(&mut words)?),
            "leave" => Command::Leave(parse_hover(&mut words)?),
            "key" => {
                let key = match next(&mut words, "key")? {
                    "enter" => "Enter".to_string(),
                    "space" => " ".to_string(),
                    other => other.to_string(),
                };
                let focus = match next(&mut words, "focus")? {
                    "package" => FocusTarget::PackageLabel(next(&mut words, "package id")?.parse()?),
                    "addon" => FocusTarget::AddonLabel(AddonId::from(next(&mut words, "add-on id")?)),
                    _ => FocusTarget::Other,
                };
                Command::Key { key, focus }
            }
            "goto" => {
                let section = next(&mut words, "section")?;
                Command::Goto(format!("#{}", section.trim_start_matches('#')))
            }
            "show" => Command::Show,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn next<'a>(words: &mut impl Iterator<Item = &'a str>, arg: &'static str) -> Result<&'a str, CommandError> {
    words.next().ok_or(CommandError::MissingArgument(arg))
}

fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(CommandError::InvalidArgument {
            arg: "switch",
            value: other.to_string(),
        }),
    }
}

fn parse_hover<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<HoverTarget, CommandError> {
    match next(words, "card|item")? {
        "card" => Ok(HoverTarget::PackageCard(next(words, "package id")?.parse()?)),
        "item" => Ok(HoverTarget::AddonItem(AddonId::from(next(words, "add-on id")?))),
        other => Err(CommandError::InvalidArgument {
            arg: "hover target",
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proposal_catalog::CatalogError;

    #[test]
    fn test_parse_toggles() {
        assert_eq!(
            "package growth on".parse::<Command>().unwrap(),
            Command::Package {
                id: PackageId::Growth,
                checked: true
            }
        );
        assert_eq!(
            "addon video-tutorials off".parse::<Command>().unwrap(),
            Command::Addon {
                id: AddonId::from("video-tutorials"),
                checked: false
            }
        );
    }

    #[test]
    fn test_parse_interaction_commands() {
        assert_eq!("cta".parse::<Command>().unwrap(), Command::Cta);
        assert_eq!(
            "hover card enterprise".parse::<Command>().unwrap(),
            Command::Hover(HoverTarget::PackageCard(PackageId::Enterprise))
        );
        assert_eq!(
            "key space addon community-ama".parse::<Command>().unwrap(),
            Command::Key {
                key: " ".to_string(),
                focus: FocusTarget::AddonLabel(AddonId::from("community-ama"))
            }
        );
        assert_eq!(
            "goto packages-section".parse::<Command>().unwrap(),
            Command::Goto("#packages-section".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<Command>(), Err(CommandError::Empty)));
        assert!(matches!("dance".parse::<Command>(), Err(CommandError::Unknown(_))));
        assert!(matches!(
            "package growth".parse::<Command>(),
            Err(CommandError::MissingArgument("on|off"))
        ));
        assert!(matches!(
            "package growth maybe".parse::<Command>(),
            Err(CommandError::InvalidArgument { arg: "switch", .. })
        ));
        assert!(matches!(
            "package platinum on".parse::<Command>(),
            Err(CommandError::Catalog(CatalogError::UnknownPackage(_)))
        ));
    }
}
