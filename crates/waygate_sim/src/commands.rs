#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Noop,
    Stop,
    List,
    Portals,
    Say(String),
    SpawnCharacter {
        name: String,
        x: f32,
        y: f32,
        z: f32,
    },
    SpawnPortal {
        x: i32,
        y: i32,
        z: i32,
        dx: f32,
        dy: f32,
        dz: f32,
    },
    Teleport {
        character: String,
        x: f32,
        y: f32,
        z: f32,
    },
    Help,
    InvalidUsage(String),
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Noop;
    }

    let input = trimmed.strip_prefix('/').unwrap_or(trimmed);
    if input.is_empty() {
        return Command::Noop;
    }

    let mut head_tail = input.splitn(2, char::is_whitespace);
    let command = head_tail.next().unwrap_or_default().to_ascii_lowercase();
    let rest = head_tail.next().unwrap_or("").trim();

    match command.as_str() {
        "stop" => Command::Stop,
        "list" => Command::List,
        "portals" => Command::Portals,
        "say" => {
            if rest.is_empty() {
                Command::InvalidUsage("Usage: /say <message>".to_string())
            } else {
                Command::Say(rest.to_string())
            }
        }
        "spawnchar" => {
            let mut args = rest.split_whitespace();
            match (args.next(), args.next(), args.next(), args.next(), args.next()) {
                (Some(name), Some(x), Some(y), Some(z), None) => {
                    match (x.parse::<f32>(), y.parse::<f32>(), z.parse::<f32>()) {
                        (Ok(x), Ok(y), Ok(z)) => Command::SpawnCharacter {
                            name: name.to_string(),
                            x,
                            y,
                            z,
                        },
                        _ => Command::InvalidUsage(
                            "Usage: /spawnchar <name> <x> <y> <z>".to_string(),
                        ),
                    }
                }
                _ => Command::InvalidUsage("Usage: /spawnchar <name> <x> <y> <z>".to_string()),
            }
        }
        "spawnportal" => {
            let args: Vec<&str> = rest.split_whitespace().collect();
            if args.len() != 6 {
                return Command::InvalidUsage(
                    "Usage: /spawnportal <x> <y> <z> <destX> <destY> <destZ>".to_string(),
                );
            }

            let location = (
                args[0].parse::<i32>(),
                args[1].parse::<i32>(),
                args[2].parse::<i32>(),
            );
            let destination = (
                args[3].parse::<f32>(),
                args[4].parse::<f32>(),
                args[5].parse::<f32>(),
            );
            match (location, destination) {
                ((Ok(x), Ok(y), Ok(z)), (Ok(dx), Ok(dy), Ok(dz))) => Command::SpawnPortal {
                    x,
                    y,
                    z,
                    dx,
                    dy,
                    dz,
                },
                _ => Command::InvalidUsage(
                    "Usage: /spawnportal <x> <y> <z> <destX> <destY> <destZ>".to_string(),
                ),
            }
        }
        "tp" => {
            let mut args = rest.split_whitespace();
            match (args.next(), args.next(), args.next(), args.next(), args.next()) {
                (Some(character), Some(x), Some(y), Some(z), None) => {
                    match (x.parse::<f32>(), y.parse::<f32>(), z.parse::<f32>()) {
                        (Ok(x), Ok(y), Ok(z)) => Command::Teleport {
                            character: character.to_string(),
                            x,
                            y,
                            z,
                        },
                        _ => Command::InvalidUsage(
                            "Usage: /tp <character|id> <x> <y> <z>".to_string(),
                        ),
                    }
                }
                _ => Command::InvalidUsage("Usage: /tp <character|id> <x> <y> <z>".to_string()),
            }
        }
        "help" => Command::Help,
        _ => Command::Unknown(input.to_string()),
    }
}
